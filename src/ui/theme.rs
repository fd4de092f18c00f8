//! Color theme constants for the coinpage UI
//!
//! Dark palette with green accents for prices.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Border color for the table, cards and footer
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Title and emphasised text
pub const COLOR_HEADER: Color = Color::White;

/// Accent for the page indicator and focused elements
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Dim text for hints and disabled buttons
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Rows and Cards
// ============================================================================

/// Background of odd rows and cards
pub const COLOR_ROW_STRIPE: Color = Color::Rgb(28, 30, 40);

/// Background of even rows and cards
pub const COLOR_ROW_BASE: Color = Color::Reset;

/// Price column
pub const COLOR_PRICE: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Symbol column
pub const COLOR_SYMBOL: Color = Color::Yellow;

// ============================================================================
// Buttons and Status
// ============================================================================

/// Enabled pagination button
pub const COLOR_BUTTON: Color = Color::White;

/// Background of a hovered pagination button
pub const COLOR_BUTTON_HOVER_BG: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Loading spinner
pub const COLOR_SPINNER: Color = Color::Yellow;

/// Fetch failure message
pub const COLOR_ERROR: Color = Color::Red;
