//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the production data source
//! - [`DataSource`] - Supplies the full ticker collection in one call

pub mod data_source;
pub mod http;

pub use data_source::DataSource;
pub use http::{Headers, HttpClient, HttpError, Response};
