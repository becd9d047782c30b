//! SavvyTrends voice skill
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use tracing::info;

use SavvyTrends::{
    config::{Settings, SkillConfig},
    handlers::{SkillDispatcher, TrendsSkill},
    server,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate().context("invalid settings")?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", SavvyTrends::info());

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(&settings)?;

    let skill_config = Arc::new(SkillConfig::default());
    let skill = TrendsSkill::new(skill_config, services, settings.trends.max_topics)?;
    let dispatcher = Arc::new(SkillDispatcher::new(
        settings.skill.application_id.clone(),
        Arc::new(skill),
    ));

    if settings.skill.application_id.is_none() {
        info!("No application id configured, accepting requests for any skill");
    }

    server::serve(&settings.server, dispatcher).await?;

    info!("SavvyTrends has been shut down.");
    Ok(())
}
