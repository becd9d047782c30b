//! Request envelope dispatcher
//!
//! Checks the application id, fires the session lifecycle callbacks and routes
//! each request to the turn handler. Recoverable handler failures are turned
//! into a generic spoken error so the conversation never just dies.

use std::sync::Arc;
use tracing::{error, warn};

use crate::models::{Request, RequestEnvelope, ResponseEnvelope, SkillResponse};
use crate::state::SessionAttributes;
use crate::utils::errors::{SkillError, Result};
use crate::utils::logging;
use super::{TurnContext, TurnHandler};

/// Spoken when a recoverable error interrupts a turn
pub const GENERIC_ERROR_SPEECH: &str = "Sorry, there was an error. Please try again later.";

/// Routes request envelopes to a [`TurnHandler`]
#[derive(Clone)]
pub struct SkillDispatcher {
    application_id: Option<String>,
    handler: Arc<dyn TurnHandler>,
}

impl SkillDispatcher {
    pub fn new(application_id: Option<String>, handler: Arc<dyn TurnHandler>) -> Self {
        Self {
            application_id,
            handler,
        }
    }

    /// Handle one request envelope and produce its response envelope
    pub async fn execute(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope> {
        let RequestEnvelope { session, request, .. } = envelope;

        if let Some(ref expected) = self.application_id {
            if &session.application.application_id != expected {
                warn!(
                    expected = %expected,
                    actual = %session.application.application_id,
                    "Rejecting request for another application"
                );
                return Err(SkillError::InvalidApplicationId {
                    expected: expected.clone(),
                    actual: session.application.application_id,
                });
            }
        }

        let ctx = TurnContext {
            session_id: session.session_id,
            request_id: request.request_id().to_string(),
        };
        let mut attributes = session.attributes;

        let intent_name = match request {
            Request::IntentRequest { ref intent, .. } => Some(intent.name.as_str()),
            _ => None,
        };
        logging::log_request(&ctx.session_id, &ctx.request_id, request.kind(), intent_name);

        let started = if session.new {
            self.handler.on_session_started(&ctx, &mut attributes).await
        } else {
            Ok(())
        };

        let outcome = match started {
            Ok(()) => self.route(&ctx, &request, &mut attributes).await,
            Err(e) => Err(e),
        };

        let response = match outcome {
            Ok(response) => response,
            Err(e) if e.is_recoverable() => {
                error!(
                    session_id = %ctx.session_id,
                    request_id = %ctx.request_id,
                    severity = %e.severity(),
                    error = %e,
                    "Turn failed, answering with generic error"
                );
                SkillResponse::tell(GENERIC_ERROR_SPEECH)
            }
            Err(e) => return Err(e),
        };

        Ok(ResponseEnvelope::new(attributes, response))
    }

    async fn route(
        &self,
        ctx: &TurnContext,
        request: &Request,
        attributes: &mut SessionAttributes,
    ) -> Result<SkillResponse> {
        match request {
            Request::LaunchRequest { .. } => self.handler.on_launch(ctx, attributes).await,
            Request::IntentRequest { intent, .. } => self.handler.on_intent(ctx, intent, attributes).await,
            Request::SessionEndedRequest { reason, .. } => self
                .handler
                .on_session_ended(ctx, reason.as_deref())
                .await
                .map(|_| SkillResponse::empty()),
        }
    }
}
