//! Test helpers module
//!
//! This module provides utilities and helpers for testing the SavvyTrends skill.
//! It includes mock gateways, stub collaborators and envelope builders.

#![allow(dead_code)]

pub mod gateway_mock;
pub mod simple_test;
pub mod stub_sources;
pub mod test_data;

pub use gateway_mock::*;
pub use simple_test::*;
pub use stub_sources::*;
pub use test_data::*;
