//! Response envelope model

use serde::{Deserialize, Serialize};

use crate::state::SessionAttributes;

/// Spoken output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        OutputSpeech::PlainText { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            OutputSpeech::PlainText { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// What a turn handler answers with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

impl SkillResponse {
    /// Speak and end the session
    pub fn tell(text: impl Into<String>) -> Self {
        Self {
            output_speech: Some(OutputSpeech::plain(text)),
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Speak and keep the session open for an answer
    pub fn ask(text: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self {
            output_speech: Some(OutputSpeech::plain(text)),
            reprompt: Some(Reprompt {
                output_speech: OutputSpeech::plain(reprompt),
            }),
            should_end_session: false,
        }
    }

    /// End the session without speaking
    pub fn empty() -> Self {
        Self {
            output_speech: None,
            reprompt: None,
            should_end_session: true,
        }
    }

    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(OutputSpeech::text)
    }

    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt.as_ref().map(|r| r.output_speech.text())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: SkillResponse,
}

impl ResponseEnvelope {
    pub fn new(session_attributes: SessionAttributes, response: SkillResponse) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes,
            response,
        }
    }
}
