//! Services module
//!
//! External collaborators the skill talks to: a trends gateway and a best
//! seller catalog gateway. Handlers only see the traits, so tests can swap in
//! their own sources.

pub mod catalog;
pub mod trends;

pub use catalog::{BestSellersResponse, CatalogItem, HttpBestSellerService};
pub use trends::{HttpTrendsService, Trend, TrendsLocation};

use std::sync::Arc;
use async_trait::async_trait;

use crate::catalog::CatalogCategory;
use crate::config::settings::Settings;
use crate::utils::errors::{SkillError, UpstreamError, Result};

/// Source of trending topic names
#[async_trait]
pub trait TrendsSource: Send + Sync {
    /// Up to `limit` topic names, most popular first
    async fn trending_topics(&self, limit: usize) -> Result<Vec<String>>;
}

/// Source of best selling item titles per catalog category
#[async_trait]
pub trait BestSellerSource: Send + Sync {
    /// Up to `limit` item titles, best seller first
    async fn best_sellers(&self, category: &CatalogCategory, limit: usize) -> Result<Vec<String>>;
}

/// Map a transport failure onto the upstream error taxonomy
pub(crate) fn classify_request_error(service: &'static str, e: reqwest::Error) -> SkillError {
    let error = if e.is_timeout() {
        UpstreamError::Timeout { service }
    } else if e.is_connect() {
        UpstreamError::ServiceUnavailable { service }
    } else {
        UpstreamError::RequestFailed {
            service,
            message: e.to_string(),
        }
    };
    SkillError::Upstream(error)
}

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub trends: Arc<dyn TrendsSource>,
    pub best_sellers: Arc<dyn BestSellerSource>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with the HTTP gateways from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let trends = HttpTrendsService::new(settings.trends.clone())?;
        let best_sellers = HttpBestSellerService::new(settings.catalog.clone())?;

        Ok(Self {
            trends: Arc::new(trends),
            best_sellers: Arc::new(best_sellers),
        })
    }

    /// Build a factory from arbitrary sources
    pub fn with_sources(trends: Arc<dyn TrendsSource>, best_sellers: Arc<dyn BestSellerSource>) -> Self {
        Self { trends, best_sellers }
    }
}
