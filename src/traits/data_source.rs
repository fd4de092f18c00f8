//! Data source trait abstraction.
//!
//! A data source yields the entire ordered ticker collection in one call.
//! No paging, filtering or sorting parameters are sent; the collection view
//! paginates client-side.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::TickerRecord;

/// Supplies the full ticker collection, or fails with a [`FetchError`].
///
/// [`FetchError`]: crate::error::FetchError
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch every ticker record, in source order.
    async fn fetch_tickers(&self) -> FetchResult<Vec<TickerRecord>>;
}
