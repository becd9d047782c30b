//! HTTP routes
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/` | POST | Handle one skill request envelope |
//! | `/health` | GET | Liveness probe |

use std::sync::Arc;
use axum::{
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

use crate::handlers::SkillDispatcher;
use crate::models::{RequestEnvelope, ResponseEnvelope};
use crate::utils::errors::SkillError;

/// Build the skill router
pub fn router(dispatcher: Arc<SkillDispatcher>) -> Router {
    Router::new()
        .route("/", post(handle_skill_request))
        .route("/health", get(health))
        .with_state(dispatcher)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            info_span!(
                "http_request",
                trace_id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri(),
            )
        }))
}

async fn handle_skill_request(
    State(dispatcher): State<Arc<SkillDispatcher>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let response = dispatcher.execute(envelope).await?;
    Ok(Json(response))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": crate::NAME,
        "version": crate::VERSION,
    }))
}

/// A dispatcher failure rendered as an HTTP error
#[derive(Debug)]
pub struct ApiError(SkillError);

impl From<SkillError> for ApiError {
    fn from(error: SkillError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            SkillError::InvalidApplicationId { .. } => StatusCode::FORBIDDEN,
            SkillError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
