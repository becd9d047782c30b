//! In-memory collaborators
//!
//! Stand-ins for the trends and catalog gateways that record what they were
//! asked for.

use std::sync::Mutex;
use async_trait::async_trait;

use SavvyTrends::catalog::CatalogCategory;
use SavvyTrends::services::{BestSellerSource, TrendsSource};
use SavvyTrends::utils::errors::{Result, UpstreamError};

/// Trends source with canned topics
#[derive(Default)]
pub struct StubTrends {
    pub topics: Vec<String>,
    pub fail: bool,
}

impl StubTrends {
    pub fn with_topics(topics: &[&str]) -> Self {
        Self {
            topics: topics.iter().map(|t| t.to_string()).collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            topics: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl TrendsSource for StubTrends {
    async fn trending_topics(&self, limit: usize) -> Result<Vec<String>> {
        if self.fail {
            return Err(UpstreamError::ServiceUnavailable { service: "trends" }.into());
        }
        Ok(self.topics.iter().take(limit).cloned().collect())
    }
}

/// Best seller source with canned titles
#[derive(Default)]
pub struct StubBestSellers {
    pub titles: Vec<String>,
    pub fail: bool,
    pub requested: Mutex<Vec<String>>,
}

impl StubBestSellers {
    pub fn with_titles(count: usize) -> Self {
        Self {
            titles: (1..=count).map(|i| format!("Title {}", i)).collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl BestSellerSource for StubBestSellers {
    async fn best_sellers(&self, category: &CatalogCategory, limit: usize) -> Result<Vec<String>> {
        self.requested.lock().unwrap().push(category.name.clone());
        if self.fail {
            return Err(UpstreamError::Timeout { service: "catalog" }.into());
        }
        Ok(self.titles.iter().take(limit).cloned().collect())
    }
}
