//! CoinLore ticker listing source.
//!
//! Issues one GET against the public listing endpoint and decodes the
//! `data` array of the response envelope.

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::models::{TickerListResponse, TickerRecord};
use crate::traits::{DataSource, Headers, HttpClient};

/// Default public ticker listing endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.coinlore.net/api/tickers/";

/// Longest slice of an error body kept in a [`FetchError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// [`DataSource`] backed by the CoinLore REST API.
///
/// Generic over the HTTP client so tests can substitute
/// [`MockHttpClient`](crate::adapters::MockHttpClient).
#[derive(Debug, Clone)]
pub struct CoinLoreSource<C: HttpClient> {
    /// Listing endpoint URL
    pub endpoint: String,
    client: C,
}

impl<C: HttpClient> CoinLoreSource<C> {
    /// Create a source that queries [`DEFAULT_ENDPOINT`].
    pub fn new(client: C) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client,
        }
    }

    /// Create a source that queries a custom endpoint.
    pub fn with_endpoint(client: C, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &C {
        &self.client
    }

    fn request_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }
}

#[async_trait]
impl<C: HttpClient> DataSource for CoinLoreSource<C> {
    async fn fetch_tickers(&self) -> FetchResult<Vec<TickerRecord>> {
        tracing::debug!("Fetching ticker listing from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint, &Self::request_headers())
            .await?;

        if !response.is_success() {
            let body: String = response
                .text_lossy()
                .chars()
                .take(MAX_ERROR_BODY_CHARS)
                .collect();
            return Err(FetchError::Status {
                status: response.status,
                body,
            });
        }

        let listing: TickerListResponse = response.json()?;
        tracing::debug!("Decoded {} ticker records", listing.data.len());

        Ok(listing.data)
    }
}
