//! Card view for narrow terminals: one bordered card per record.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::truncate_to_width;
use super::layout::LayoutContext;
use super::table::{row_background, row_cells};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PRICE, COLOR_SYMBOL};
use crate::format::NumberFormat;
use crate::models::TickerRecord;

/// Rows per card: four labelled lines inside a border.
pub const CARD_HEIGHT: u16 = 6;

/// Card field labels, in display order.
pub const CARD_LABELS: [&str; 4] = ["Coin Name", "Code", "Price", "Total Supply"];

/// Render cards starting at `scroll`, as many as fit.
///
/// When some cards are below the fold, the last row says how many.
pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    items: &[TickerRecord],
    scroll: usize,
    number_format: NumberFormat,
) {
    let scroll = scroll.min(items.len().saturating_sub(1));
    let remaining = &items[scroll.min(items.len())..];

    let mut fit = LayoutContext::items_that_fit(area.height, CARD_HEIGHT);
    let needs_more_line = remaining.len() > fit;
    if needs_more_line {
        fit = LayoutContext::items_that_fit(area.height.saturating_sub(1), CARD_HEIGHT);
    }
    let shown = remaining.len().min(fit);

    let mut constraints: Vec<Constraint> = vec![Constraint::Length(CARD_HEIGHT); shown];
    constraints.push(Constraint::Fill(1));
    let slots = Layout::vertical(constraints).split(area);

    for (offset, record) in remaining.iter().take(shown).enumerate() {
        render_card(frame, slots[offset], record, scroll + offset, number_format);
    }

    if needs_more_line {
        let hidden = remaining.len() - shown;
        let more = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("▼ {} more (j/k to scroll)", hidden),
                Style::default().fg(COLOR_DIM),
            )),
            more,
        );
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    record: &TickerRecord,
    index: usize,
    number_format: NumberFormat,
) {
    let values = row_cells(record, number_format);
    let label_width = CARD_LABELS.iter().map(|l| l.len()).max().unwrap_or(0);
    let value_width = (area.width as usize).saturating_sub(label_width + 4);

    let value_styles = [
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
        Style::default().fg(COLOR_SYMBOL),
        Style::default().fg(COLOR_PRICE),
        Style::default(),
    ];

    let lines: Vec<Line> = CARD_LABELS
        .iter()
        .zip(values.iter())
        .zip(value_styles.iter())
        .map(|((label, value), style)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", label, width = label_width),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(truncate_to_width(value, value_width), *style),
            ])
        })
        .collect();

    let card = Paragraph::new(lines)
        .style(Style::default().bg(row_background(index)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
    frame.render_widget(card, area);
}
