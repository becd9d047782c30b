//! Mock trends and catalog gateways for testing
//!
//! This module provides a mock HTTP server that simulates the trends and
//! best seller gateways. It uses wiremock to create configurable responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Mock gateway server for testing
pub struct GatewayMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl GatewayMockServer {
    /// Create a new mock gateway server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Setup mock for the trends endpoint
    pub async fn mock_trends(&self, place_id: u64, names: &[&str], config: MockResponseConfig) {
        let body = config.custom_response.clone().unwrap_or_else(|| {
            let trends: Vec<Value> = names
                .iter()
                .map(|name| json!({"name": name, "tweet_volume": null}))
                .collect();
            json!([{"trends": trends, "locations": [{"woeid": place_id}]}])
        });

        Mock::given(method("GET"))
            .and(path("/trends/place.json"))
            .and(query_param("id", place_id.to_string()))
            .respond_with(response(body, &config))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the best sellers endpoint of one browse node
    pub async fn mock_best_sellers(&self, browse_node: &str, titles: &[&str], config: MockResponseConfig) {
        let body = config.custom_response.clone().unwrap_or_else(|| {
            let items: Vec<Value> = titles.iter().map(|title| json!({"title": title})).collect();
            json!({"items": items})
        });

        Mock::given(method("GET"))
            .and(path("/bestsellers"))
            .and(query_param("browse_node", browse_node))
            .respond_with(response(body, &config))
            .mount(&self.server)
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}

fn response(body: Value, config: &MockResponseConfig) -> ResponseTemplate {
    let mut response = ResponseTemplate::new(config.status).set_body_json(body);
    if let Some(delay) = config.delay_ms {
        response = response.set_delay(std::time::Duration::from_millis(delay));
    }
    response
}
