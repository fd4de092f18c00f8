//! Status Indicator Component
//!
//! The loading spinner and the fetch failure message, both centered in the
//! area the table would otherwise occupy.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{COLOR_ERROR, COLOR_SPINNER};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Loop ticks per spinner frame (about 100ms at the 16ms tick).
pub const SPINNER_TICKS_PER_FRAME: u64 = 6;

/// Text shown next to the spinner.
pub const LOADING_TEXT: &str = "Loading...";

/// Status indicator types
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner {
        message: String,
        /// Current frame index, wraps around
        frame: usize,
    },
    /// Error indicator with message
    Error { message: String },
}

impl StatusIndicatorType {
    /// The loading spinner at the given frame.
    pub fn loading(frame: usize) -> Self {
        Self::Spinner {
            message: LOADING_TEXT.to_string(),
            frame,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Advance the spinner frame
pub fn next_spinner_frame(current: usize) -> usize {
    (current + 1) % SPINNER_FRAMES.len()
}

/// Render a status indicator as lines.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            vec![Line::from(vec![
                Span::styled(
                    format!("{} ", get_spinner_char(*frame)),
                    Style::default().fg(COLOR_SPINNER),
                ),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_SPINNER)
                        .add_modifier(Modifier::BOLD),
                ),
            ])]
        }
        StatusIndicatorType::Error { message } => {
            vec![Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)), // X mark
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_ERROR)
                        .add_modifier(Modifier::BOLD),
                ),
            ])]
        }
    }
}

/// Draw the indicator centered in `area`.
pub fn render_status(frame: &mut Frame, area: Rect, indicator: &StatusIndicatorType) {
    let lines = render_status_indicator(indicator);
    let height = (lines.len() as u16).min(area.height);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, middle);
}
