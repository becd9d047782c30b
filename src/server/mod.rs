//! HTTP host for the skill
//!
//! Exposes the dispatcher over HTTP so the voice platform (or a gateway in
//! front of it) can post request envelopes.

pub mod routes;

pub use routes::{router, ApiError};

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::handlers::SkillDispatcher;
use crate::utils::errors::{SkillError, Result};

/// Bind the configured address and serve until ctrl-c
pub async fn serve(config: &ServerConfig, dispatcher: Arc<SkillDispatcher>) -> Result<()> {
    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        SkillError::Config(format!("Invalid bind address '{}': {}", config.bind_address, e))
    })?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return Err(e.into());
        }
    };

    info!("Skill endpoint listening on http://{}", addr);

    axum::serve(listener, router(dispatcher))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Skill endpoint stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
