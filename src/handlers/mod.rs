//! Skill handlers module
//!
//! This module contains the turn handler contract and its implementations:
//! - [`TurnHandler`], the capability every skill implements
//! - [`TrendsSkill`], the trending topics and best sellers skill
//! - [`SkillDispatcher`], which routes request envelopes to a handler

pub mod dispatcher;
pub mod trends;

pub use dispatcher::{SkillDispatcher, GENERIC_ERROR_SPEECH};
pub use trends::TrendsSkill;

use async_trait::async_trait;

use crate::models::{Intent, SkillResponse};
use crate::state::SessionAttributes;
use crate::utils::errors::Result;

/// Intent names the skill understands
pub mod intents {
    pub const TRENDS: &str = "Trends";
    pub const TOP_SELLERS: &str = "TopSellers";
    pub const HEAR_MORE: &str = "HearMore";
    pub const DONT_HEAR_MORE: &str = "DontHearMore";
    pub const HELP: &str = "HelpIntent";
    pub const BUILTIN_YES: &str = "AMAZON.YesIntent";
    pub const BUILTIN_NO: &str = "AMAZON.NoIntent";
    pub const BUILTIN_HELP: &str = "AMAZON.HelpIntent";
    pub const BUILTIN_STOP: &str = "AMAZON.StopIntent";
    pub const BUILTIN_CANCEL: &str = "AMAZON.CancelIntent";

    /// Slot carrying the spoken category for [`TOP_SELLERS`]
    pub const CATEGORY_SLOT: &str = "Category";
}

/// Identifies the conversation a turn belongs to
#[derive(Debug, Clone)]
pub struct TurnContext {
    pub session_id: String,
    pub request_id: String,
}

/// Handles the turns of one conversation
///
/// Session attributes are owned by the caller; a handler may mutate them and
/// the dispatcher echoes them back in the response.
#[async_trait]
pub trait TurnHandler: Send + Sync {
    /// Called once when a new session opens, before the first request
    async fn on_session_started(&self, _ctx: &TurnContext, _session: &mut SessionAttributes) -> Result<()> {
        Ok(())
    }

    /// The user opened the skill without asking for anything
    async fn on_launch(&self, ctx: &TurnContext, session: &mut SessionAttributes) -> Result<SkillResponse>;

    /// The user asked for something
    async fn on_intent(
        &self,
        ctx: &TurnContext,
        intent: &Intent,
        session: &mut SessionAttributes,
    ) -> Result<SkillResponse>;

    /// The platform closed the session
    async fn on_session_ended(&self, _ctx: &TurnContext, _reason: Option<&str>) -> Result<()> {
        Ok(())
    }
}
