//! UI rendering for coinpage
//!
//! One screen, top to bottom:
//! - Header with the title and record count
//! - Body: spinner while loading, the fixed message on failure, otherwise
//!   the current page as a table (80+ columns) or as cards
//! - Pagination footer with clickable Previous/Next buttons
//! - Key hints, when there is room
//!
//! The renderer only reads the app's latest `ViewSnapshot`; page state
//! lives in the collection view.

mod cards;
pub mod components;
mod helpers;
pub mod interaction;
mod layout;
mod pagination;
mod table;
mod theme;

pub use cards::{render_cards, CARD_HEIGHT, CARD_LABELS};
pub use components::{
    get_spinner_char, render_status, StatusIndicatorType, LOADING_TEXT, SPINNER_TICKS_PER_FRAME,
};
pub use helpers::{max_width, truncate_to_width};
pub use interaction::{handle_click_action, ClickAction, HitArea, HitAreaRegistry};
pub use layout::{breakpoints, LayoutContext};
pub use pagination::{button_rects, render_pagination, NEXT_LABEL, PREVIOUS_LABEL};
pub use table::{render_table, row_cells, TABLE_HEADERS};
pub use theme::*;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::collection::{LoadStatus, ViewSnapshot};

/// Title shown in the header.
pub const APP_TITLE: &str = "Coinpage";

/// Key hint line shown under the footer.
pub const KEY_HINTS: &str = "←/h/p previous · →/l/n next · q quit";

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let hint_rows = if ctx.should_show_key_hints() { 1 } else { 0 };

    let [header, body, footer, hints] = Layout::vertical([
        Constraint::Length(ctx.header_height()),
        Constraint::Fill(1),
        Constraint::Length(ctx.footer_height()),
        Constraint::Length(hint_rows),
    ])
    .areas(area);

    render_header(frame, header, &app.snapshot);

    match &app.snapshot.status {
        LoadStatus::Idle | LoadStatus::Loading => {
            render_status(frame, body, &StatusIndicatorType::loading(app.spinner_frame()));
        }
        LoadStatus::Failed { message } => {
            render_status(frame, body, &StatusIndicatorType::error(message.clone()));
        }
        LoadStatus::Ready => {
            if ctx.use_card_view() {
                render_cards(
                    frame,
                    body,
                    &app.snapshot.visible_items,
                    app.card_scroll,
                    app.number_format,
                );
            } else {
                render_table(frame, body, &app.snapshot.visible_items, app.number_format);
            }
        }
    }

    render_pagination(frame, footer, &app.snapshot, &mut app.hit_registry);

    if hint_rows > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM)))
                .alignment(ratatui::layout::Alignment::Center),
            hints,
        );
    }
}

fn render_header(frame: &mut Frame, area: Rect, snapshot: &ViewSnapshot) {
    let title = Span::styled(
        APP_TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );
    let mut spans = vec![title];
    if snapshot.status.is_ready() {
        spans.push(Span::styled(
            format!("  {} coins", snapshot.total_records),
            Style::default().fg(COLOR_DIM),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    if area.height >= 3 {
        frame.render_widget(
            paragraph.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(COLOR_BORDER)),
            ),
            area,
        );
    } else {
        frame.render_widget(paragraph, area);
    }
}
