//! Pagination footer: Previous button, page indicator, Next button.
//!
//! Previous is only drawn when there is a previous page. Next is always
//! drawn and dimmed when there is no next page. Enabled buttons register a
//! hit area so they can be clicked and hovered.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BUTTON, COLOR_BUTTON_HOVER_BG, COLOR_DIM};
use crate::collection::ViewSnapshot;

/// Label of the Previous button.
pub const PREVIOUS_LABEL: &str = " ◀ Previous ";
/// Label of the Next button.
pub const NEXT_LABEL: &str = " Next ▶ ";

/// Style a button gets while the pointer is over it.
pub fn hover_style() -> Style {
    Style::default()
        .fg(COLOR_BUTTON)
        .bg(COLOR_BUTTON_HOVER_BG)
        .add_modifier(Modifier::BOLD)
}

/// Rects of the two buttons inside the footer row.
pub fn button_rects(row: Rect) -> (Rect, Rect) {
    let prev_width = (PREVIOUS_LABEL.width() as u16).min(row.width);
    let next_width = (NEXT_LABEL.width() as u16).min(row.width);
    let previous = Rect::new(row.x, row.y, prev_width, row.height.min(1));
    let next = Rect::new(
        row.right().saturating_sub(next_width),
        row.y,
        next_width,
        row.height.min(1),
    );
    (previous, next)
}

/// Render the footer into `area` and register the enabled buttons.
pub fn render_pagination(
    frame: &mut Frame,
    area: Rect,
    snapshot: &ViewSnapshot,
    registry: &mut HitAreaRegistry,
) {
    let row = if area.height >= 3 {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    } else {
        area
    };
    if row.width == 0 || row.height == 0 {
        return;
    }

    let label = Paragraph::new(Span::styled(
        snapshot.page_label(),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(label, Rect::new(row.x, row.y, row.width, 1));

    let (previous_rect, next_rect) = button_rects(row);
    let enabled = Style::default()
        .fg(COLOR_BUTTON)
        .add_modifier(Modifier::BOLD);

    if snapshot.can_go_previous {
        registry.register(previous_rect, ClickAction::PreviousPage, Some(hover_style()));
        let style = registry.get_hover_style(previous_rect).unwrap_or(enabled);
        frame.render_widget(Paragraph::new(Span::styled(PREVIOUS_LABEL, style)), previous_rect);
    }

    let next_style = if snapshot.can_go_next {
        registry.register(next_rect, ClickAction::NextPage, Some(hover_style()));
        registry.get_hover_style(next_rect).unwrap_or(enabled)
    } else {
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::DIM)
    };
    frame.render_widget(Paragraph::new(Span::styled(NEXT_LABEL, next_style)), next_rect);
}
