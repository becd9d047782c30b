//! Trending topics service implementation
//!
//! Fetches the trending topics for a place from a trends gateway speaking the
//! `/trends/place.json` response shape.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::TrendsConfig;
use crate::utils::errors::{SkillError, UpstreamError, Result};
use super::{classify_request_error, TrendsSource};

const SERVICE: &str = "trends";

/// One location block of the trends response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrendsLocation {
    #[serde(default)]
    pub trends: Vec<Trend>,
}

/// A single trending topic
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Trend {
    pub name: String,
    #[serde(default)]
    pub tweet_volume: Option<u64>,
}

/// HTTP client for the trends gateway
#[derive(Clone, Debug)]
pub struct HttpTrendsService {
    client: Client,
    config: TrendsConfig,
}

impl HttpTrendsService {
    /// Create a new HttpTrendsService instance
    pub fn new(config: TrendsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("SavvyTrends-Skill/1.0")
            .build()
            .map_err(SkillError::Http)?;

        Ok(Self { client, config })
    }

    async fn fetch_locations(&self) -> Result<Vec<TrendsLocation>> {
        let url = format!("{}/trends/place.json", self.config.api_url.trim_end_matches('/'));

        debug!(url = %url, place_id = self.config.place_id, "Making trends API request");

        let mut request = self
            .client
            .get(&url)
            .query(&[("id", self.config.place_id)]);
        if let Some(ref token) = self.config.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_request_error(SERVICE, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(UpstreamError::RequestFailed {
                service: SERVICE,
                message: format!("HTTP {}: {}", status, error_text),
            }
            .into());
        }

        let locations: Vec<TrendsLocation> = response.json().await.map_err(|e| UpstreamError::InvalidResponse {
            service: SERVICE,
            message: e.to_string(),
        })?;

        Ok(locations)
    }
}

#[async_trait]
impl TrendsSource for HttpTrendsService {
    async fn trending_topics(&self, limit: usize) -> Result<Vec<String>> {
        let locations = self.fetch_locations().await?;

        let Some(location) = locations.into_iter().next() else {
            warn!(place_id = self.config.place_id, "Trends response contained no locations");
            return Err(UpstreamError::InvalidResponse {
                service: SERVICE,
                message: "no locations in response".to_string(),
            }
            .into());
        };

        let topics: Vec<String> = location
            .trends
            .into_iter()
            .map(|trend| trend.name)
            .filter(|name| !name.trim().is_empty())
            .take(limit)
            .collect();

        debug!(count = topics.len(), "Fetched trending topics");
        Ok(topics)
    }
}
