//! Mock implementations for testing.
//!
//! Test doubles for the trait abstractions, usable without network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockDataSource`] - Data source with a configurable result and gate

pub mod data_source;
pub mod http;

pub use data_source::{MockDataSource, MockGate};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
