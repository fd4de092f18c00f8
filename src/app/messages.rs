//! AppMessage enum for async communication within the application.

use crate::collection::LoadOutcome;

/// Messages received from background tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The view's single fetch settled
    TickersLoaded(LoadOutcome),
}
