//! Data models module
//!
//! Request and response envelopes exchanged with the voice platform

pub mod request;
pub mod response;

// Re-export commonly used models
pub use request::{Application, Intent, Request, RequestEnvelope, Session, Slot, User};
pub use response::{OutputSpeech, Reprompt, ResponseEnvelope, SkillResponse};
