//! Trending topics and best sellers skill
//!
//! Reads out the trending topics for the configured place, and pages through
//! the best sellers of a spoken catalog category over several turns.

use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::catalog::{CategoryResolver, Resolution};
use crate::config::SkillConfig;
use crate::models::{Intent, SkillResponse};
use crate::services::ServiceFactory;
use crate::state::{Advance, Page, PaginationEngine, SessionAttributes};
use crate::utils::errors::{SkillError, Result};
use crate::utils::logging;
use super::{intents, TurnContext, TurnHandler};

pub const HELP_SPEECH: &str = "You can hear the trending topics in your area, or ask for the best sellers \
    in a category. For example, get best sellers for books, or you can say exit. \
    Now, what can I help you with?";

pub const HELP_REPROMPT: &str = "I'm sorry I didn't understand that. You can say things like, \
    books, movies, music. Or you can say exit. Now, what can I help you with?";

pub const UNKNOWN_CATEGORY_SPEECH: &str = "I'm sorry, I don't know that category. \
    For which category would you like to hear the best sellers?";

pub const GOODBYE_SPEECH: &str = "Goodbye.";

/// The concrete turn handler of this skill
pub struct TrendsSkill {
    config: Arc<SkillConfig>,
    resolver: CategoryResolver,
    pagination: PaginationEngine,
    services: ServiceFactory,
    max_topics: usize,
}

impl TrendsSkill {
    pub fn new(config: Arc<SkillConfig>, services: ServiceFactory, max_topics: usize) -> Result<Self> {
        Ok(Self {
            resolver: CategoryResolver::new(config.clone())?,
            pagination: PaginationEngine::new(config.clone()),
            config,
            services,
            max_topics,
        })
    }

    /// Read out the trending topics
    async fn handle_trends(&self, ctx: &TurnContext) -> Result<SkillResponse> {
        let topics = self
            .services
            .trends
            .trending_topics(self.max_topics)
            .await
            .map_err(|e| {
                logging::log_api_error("trends", &e.to_string(), Some(&ctx.session_id));
                e
            })?;

        if topics.is_empty() {
            warn!(session_id = %ctx.session_id, "No trending topics returned");
            return Ok(SkillResponse::tell("There are no trending topics in your area right now."));
        }

        info!(session_id = %ctx.session_id, count = topics.len(), "Reading trending topics");
        Ok(SkillResponse::tell(format!(
            "Here are the top trending topics in your area. {}.",
            topics.join(", ")
        )))
    }

    /// Resolve the spoken category, fetch its best sellers and read the first batch
    async fn handle_top_sellers(
        &self,
        ctx: &TurnContext,
        intent: &Intent,
        session: &mut SessionAttributes,
    ) -> Result<SkillResponse> {
        let phrase = intent.slot_value(intents::CATEGORY_SLOT);
        let resolution = self.resolver.resolve(phrase);
        logging::log_category_resolution(
            &ctx.session_id,
            phrase,
            resolution.category().map(|c| c.name.as_str()),
        );

        let category = match resolution {
            Resolution::Resolved { category, .. } => category,
            Resolution::Unresolved => {
                return Ok(SkillResponse::ask(UNKNOWN_CATEGORY_SPEECH, HELP_REPROMPT));
            }
        };

        let items = self
            .services
            .best_sellers
            .best_sellers(&category, self.config.max_items())
            .await
            .map_err(|e| {
                logging::log_api_error("catalog", &e.to_string(), Some(&ctx.session_id));
                e
            })?;

        if items.is_empty() {
            warn!(session_id = %ctx.session_id, category = %category.name, "No best sellers returned");
            return Ok(SkillResponse::tell(format!(
                "I couldn't find any best sellers for {} right now.",
                category.name
            )));
        }

        let page = self.pagination.start(session, &category.name, &items)?;
        Ok(self.page_response(ctx, page))
    }

    /// Read the next batch of the active list
    fn handle_hear_more(&self, ctx: &TurnContext, session: &mut SessionAttributes) -> Result<SkillResponse> {
        match self.pagination.advance(session)? {
            Advance::NoActiveList { speech, reprompt } => Ok(SkillResponse::ask(speech, reprompt)),
            Advance::Page(page) => Ok(self.page_response(ctx, page)),
        }
    }

    fn page_response(&self, ctx: &TurnContext, page: Page) -> SkillResponse {
        logging::log_pagination(&ctx.session_id, page.cursor, page.should_continue);
        if !page.missing.is_empty() {
            warn!(session_id = %ctx.session_id, missing = ?page.missing, "Read a list with gaps");
        }

        match page.reprompt {
            Some(reprompt) if page.should_continue => SkillResponse::ask(page.speech, reprompt),
            _ => SkillResponse::tell(page.speech),
        }
    }
}

#[async_trait]
impl TurnHandler for TrendsSkill {
    async fn on_session_started(&self, ctx: &TurnContext, _session: &mut SessionAttributes) -> Result<()> {
        info!(session_id = %ctx.session_id, request_id = %ctx.request_id, "Session started");
        Ok(())
    }

    async fn on_launch(&self, ctx: &TurnContext, _session: &mut SessionAttributes) -> Result<SkillResponse> {
        self.handle_trends(ctx).await
    }

    async fn on_intent(
        &self,
        ctx: &TurnContext,
        intent: &Intent,
        session: &mut SessionAttributes,
    ) -> Result<SkillResponse> {
        match intent.name.as_str() {
            intents::TRENDS => self.handle_trends(ctx).await,
            intents::TOP_SELLERS => self.handle_top_sellers(ctx, intent, session).await,
            intents::HEAR_MORE | intents::BUILTIN_YES => self.handle_hear_more(ctx, session),
            intents::DONT_HEAR_MORE | intents::BUILTIN_NO => Ok(SkillResponse::empty()),
            intents::BUILTIN_STOP | intents::BUILTIN_CANCEL => Ok(SkillResponse::tell(GOODBYE_SPEECH)),
            intents::HELP | intents::BUILTIN_HELP => Ok(SkillResponse::ask(HELP_SPEECH, HELP_REPROMPT)),
            other => Err(SkillError::UnknownIntent(other.to_string())),
        }
    }

    async fn on_session_ended(&self, ctx: &TurnContext, reason: Option<&str>) -> Result<()> {
        info!(session_id = %ctx.session_id, reason = ?reason, "Session ended");
        Ok(())
    }
}
