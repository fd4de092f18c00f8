//! Reusable UI Components
//!
//! - `StatusIndicator` - Loading spinner and error message

mod status_indicator;

pub use status_indicator::{
    get_spinner_char, next_spinner_frame, render_status, render_status_indicator,
    StatusIndicatorType, LOADING_TEXT, SPINNER_TICKS_PER_FRAME,
};
