//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the layout
//! questions the renderer asks: table or cards, and how tall the chrome is.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Small terminal (< 80 columns); below this the card view is used
    pub const SM_WIDTH: u16 = 80;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```
/// use coinpage::ui::LayoutContext;
///
/// assert!(LayoutContext::new(79, 30).use_card_view());
/// assert!(!LayoutContext::new(80, 30).use_card_view());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Build a context from a render area.
    pub fn from_rect(area: ratatui::layout::Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    // ========================================================================
    // Layout Mode Decisions
    // ========================================================================

    /// Narrow terminals show one card per record instead of the table.
    pub fn use_card_view(&self) -> bool {
        self.is_narrow()
    }

    /// Rows taken by the title bar.
    pub fn header_height(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            3
        }
    }

    /// Rows taken by the pagination footer.
    pub fn footer_height(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            3
        }
    }

    /// Whether the key hint line fits under the footer.
    pub fn should_show_key_hints(&self) -> bool {
        !self.is_short()
    }

    /// Number of whole items of `item_height` rows that fit in `rows`.
    pub fn items_that_fit(rows: u16, item_height: u16) -> usize {
        if item_height == 0 {
            return 0;
        }
        (rows / item_height) as usize
    }
}
