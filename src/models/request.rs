//! Request envelope model
//!
//! The JSON shape the voice platform posts for every turn. Only the fields the
//! skill reads are modelled; unknown fields are ignored.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::state::SessionAttributes;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    pub session: Session,
    pub request: Request,
}

fn default_version() -> String {
    "1.0".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    #[serde(default)]
    pub attributes: SessionAttributes,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

/// The request for this turn, tagged by `type`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename_all = "camelCase")]
    LaunchRequest {
        request_id: String,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
    },
    #[serde(rename_all = "camelCase")]
    IntentRequest {
        request_id: String,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
        intent: Intent,
    },
    #[serde(rename_all = "camelCase")]
    SessionEndedRequest {
        request_id: String,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
        #[serde(default)]
        reason: Option<String>,
    },
}

impl Request {
    pub fn request_id(&self) -> &str {
        match self {
            Request::LaunchRequest { request_id, .. }
            | Request::IntentRequest { request_id, .. }
            | Request::SessionEndedRequest { request_id, .. } => request_id,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Request::LaunchRequest { timestamp, .. }
            | Request::IntentRequest { timestamp, .. }
            | Request::SessionEndedRequest { timestamp, .. } => *timestamp,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Request::LaunchRequest { .. } => "LaunchRequest",
            Request::IntentRequest { .. } => "IntentRequest",
            Request::SessionEndedRequest { .. } => "SessionEndedRequest",
        }
    }
}

/// A classified user request with its slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    pub fn with_slot(mut self, name: &str, value: impl Into<String>) -> Self {
        self.slots.insert(
            name.to_string(),
            Slot {
                name: name.to_string(),
                value: Some(value.into()),
            },
        );
        self
    }

    /// Value of a slot, if it was filled
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|slot| slot.value.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}
