//! Best seller catalog service implementation
//!
//! Looks up the best selling items for a catalog browse node through a
//! catalog gateway.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogCategory;
use crate::config::CatalogConfig;
use crate::utils::errors::{SkillError, UpstreamError, Result};
use super::{classify_request_error, BestSellerSource};

const SERVICE: &str = "catalog";

/// Catalog gateway response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BestSellersResponse {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogItem {
    pub title: String,
    #[serde(default)]
    pub asin: Option<String>,
}

/// HTTP client for the catalog gateway
#[derive(Clone, Debug)]
pub struct HttpBestSellerService {
    client: Client,
    config: CatalogConfig,
}

impl HttpBestSellerService {
    /// Create a new HttpBestSellerService instance
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("SavvyTrends-Skill/1.0")
            .build()
            .map_err(SkillError::Http)?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl BestSellerSource for HttpBestSellerService {
    async fn best_sellers(&self, category: &CatalogCategory, limit: usize) -> Result<Vec<String>> {
        let url = format!("{}/bestsellers", self.config.api_url.trim_end_matches('/'));

        debug!(
            url = %url,
            category = %category.name,
            browse_node = %category.browse_node,
            "Making catalog API request"
        );

        let mut query = vec![
            ("browse_node", category.browse_node.as_str()),
            ("category", category.name.as_str()),
        ];
        if let Some(ref tag) = self.config.associate_tag {
            query.push(("associate_tag", tag.as_str()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
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

        let body: BestSellersResponse = response.json().await.map_err(|e| UpstreamError::InvalidResponse {
            service: SERVICE,
            message: e.to_string(),
        })?;

        let titles: Vec<String> = body
            .items
            .into_iter()
            .map(|item| item.title)
            .filter(|title| !title.trim().is_empty())
            .take(limit)
            .collect();

        debug!(category = %category.name, count = titles.len(), "Fetched best sellers");
        Ok(titles)
    }
}
