//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from `coinpage::adapters::mock`
//! and provides additional test-specific mock configurations.

pub use coinpage::adapters::mock::{MockDataSource, MockGate, MockHttpClient, MockResponse};
pub use coinpage::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    /// Creates a new mock HTTP configuration.
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a JSON response with the given status.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Configures a transport error for a URL.
    pub fn with_transport_error(self, url: &str, error: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(error));
        self
    }

    /// Configures a default success response for unmatched URLs.
    pub fn with_default_success(self, status: u16, body: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Success(Response::new(
                status,
                Bytes::from(body.to_string()),
            )));
        self
    }

    /// Builds the configured MockHttpClient.
    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_http_config_json_response() {
        let client = MockHttpConfig::new()
            .with_json_response("https://api.test/tickers/", 200, r#"{"data":[]}"#)
            .build();

        let response = client
            .get("https://api.test/tickers/", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_mock_http_config_transport_error() {
        let client = MockHttpConfig::new()
            .with_transport_error(
                "https://api.test/tickers/",
                HttpError::Timeout("30s".to_string()),
            )
            .build();

        let result = client.get("https://api.test/tickers/", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_mock_http_config_default() {
        let client = MockHttpConfig::new().with_default_success(204, "").build();

        let response = client.get("https://anything/", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 204);
    }
}
