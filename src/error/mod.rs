//! Error types for ticker fetching.
//!
//! There is exactly one failure kind the collection view cares about:
//! [`FetchError`]. It covers every problem between issuing the listing
//! request and holding parsed records (transport, HTTP status, decoding).
//! The view collapses all of them into its `Failed` state and shows
//! [`FETCH_FAILED_MESSAGE`] instead of the raw error.

mod fetch;

pub use fetch::{FetchError, FetchResult, FETCH_FAILED_MESSAGE};
