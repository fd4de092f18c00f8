//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`CoinLoreSource`] - Ticker listing from the CoinLore API
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockDataSource`] - Canned ticker results, optionally gated

pub mod coinlore;
pub mod mock;
pub mod reqwest_http;

pub use coinlore::{CoinLoreSource, DEFAULT_ENDPOINT};
pub use mock::{MockDataSource, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
