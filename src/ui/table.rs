//! Table view for wide terminals.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::helpers::truncate_to_width;
use super::theme::{
    COLOR_BORDER, COLOR_HEADER, COLOR_PRICE, COLOR_ROW_BASE, COLOR_ROW_STRIPE, COLOR_SYMBOL,
};
use crate::format::{format_price, format_supply, NumberFormat};
use crate::models::TickerRecord;

/// Column headers, in display order.
pub const TABLE_HEADERS: [&str; 4] = ["💰 Coin", "📄 Code", "🤑 Price", "📈 Total Supply"];

/// Column widths as percentages of the table's inner width.
const COLUMN_PERCENTAGES: [u16; 4] = [30, 14, 22, 34];

/// Background for the row at `index` on the current page.
pub fn row_background(index: usize) -> ratatui::style::Color {
    if index % 2 == 0 {
        COLOR_ROW_BASE
    } else {
        COLOR_ROW_STRIPE
    }
}

/// Build the display cells of one record.
pub fn row_cells(record: &TickerRecord, number_format: NumberFormat) -> [String; 4] {
    [
        record.name.clone(),
        record.symbol.clone(),
        format_price(&record.price_usd),
        format_supply(&record.total_supply, &record.symbol, number_format),
    ]
}

/// Render the current page as a striped table with a header row.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    items: &[TickerRecord],
    number_format: NumberFormat,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let column_widths: Vec<usize> = COLUMN_PERCENTAGES
        .iter()
        .map(|p| inner_width * *p as usize / 100)
        .collect();

    let header = Row::new(TABLE_HEADERS.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1)
    .bottom_margin(1);

    let rows = items.iter().enumerate().map(|(i, record)| {
        let [name, symbol, price, supply] = row_cells(record, number_format);
        Row::new(vec![
            Cell::from(truncate_to_width(&name, column_widths[0])),
            Cell::from(Span::styled(
                truncate_to_width(&symbol, column_widths[1]),
                Style::default().fg(COLOR_SYMBOL),
            )),
            Cell::from(Span::styled(
                truncate_to_width(&price, column_widths[2]),
                Style::default().fg(COLOR_PRICE),
            )),
            Cell::from(truncate_to_width(&supply, column_widths[3])),
        ])
        .style(Style::default().bg(row_background(i)))
    });

    let widths = COLUMN_PERCENTAGES.map(Constraint::Percentage);
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );

    frame.render_widget(table, area);
}
