//! Paginated collection view.
//!
//! The core of the application: owns the fetched ticker records, the load
//! status and the current page, derives the visible page on demand, and
//! pushes an immutable [`ViewSnapshot`] to every subscriber after each
//! mutation.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──start_load──▶ Loading ──apply_load(Ok)──▶ Ready
//!                         │
//!                         └──apply_load(Err)──▶ Failed
//! ```
//!
//! `Ready` and `Failed` are terminal. A view loads at most once; a new load
//! means a new view.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use coinpage::collection::PaginatedCollectionView;
//!
//! let (mut view, pending) = PaginatedCollectionView::mount(source);
//! let outcome = pending.run().await;
//! view.apply_load(outcome);
//! view.go_to_next_page();
//! for record in view.visible_slice() {
//!     println!("{}", record.name);
//! }
//! ```

mod snapshot;
mod state;
mod subscriber;
mod view;

pub use snapshot::ViewSnapshot;
pub use state::{page_bounds, page_count, CollectionState, LoadStatus, PAGE_SIZE};
pub use subscriber::{ViewSubscriber, WatchSubscriber};
pub use view::{LoadOutcome, PaginatedCollectionView, PendingLoad};
