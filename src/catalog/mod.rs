//! Catalog module
//!
//! Static category tables and the spoken category resolver.

pub mod resolver;
pub mod tables;

pub use resolver::{CategoryResolver, MatchStrategy, Resolution};
pub use tables::{AliasTable, CatalogCategory, CategoryTable, BROWSE_NODES, SPOKEN_ALIASES};
