//! Non-interactive `--print` mode.
//!
//! Loads the collection once through a [`PaginatedCollectionView`], walks
//! forward to the requested page with the view's own navigation, and writes
//! the page as plain text.

use std::io::{self, Write};
use std::sync::Arc;

use unicode_width::UnicodeWidthStr;

use crate::collection::{PaginatedCollectionView, ViewSnapshot};
use crate::format::NumberFormat;
use crate::traits::DataSource;
use crate::ui::row_cells;

/// How a print run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The page was printed; `page` is the page actually shown
    Printed { page: usize },
    /// The fetch failed; carries the user-facing message
    Failed(String),
}

/// Fetch, navigate to `page` and print it to `out`.
///
/// A page past the end stops at the last page, because navigation never
/// leaves the valid range.
pub async fn print_page<W: Write>(
    source: Arc<dyn DataSource>,
    page: usize,
    number_format: NumberFormat,
    out: &mut W,
) -> io::Result<PrintOutcome> {
    let mut view = PaginatedCollectionView::new();
    view.load(source).await;

    if let Some(message) = view.status().error_message() {
        return Ok(PrintOutcome::Failed(message.to_string()));
    }

    while view.current_page() < page && view.go_to_next_page() {}

    let snapshot = view.snapshot();
    write_snapshot(&snapshot, number_format, out)?;
    Ok(PrintOutcome::Printed {
        page: snapshot.current_page,
    })
}

/// Pad `cell` with spaces to `width` terminal columns.
fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right_align {
        format!("{}{}", fill, cell)
    } else {
        format!("{}{}", cell, fill)
    }
}

/// Render a snapshot as aligned plain-text rows preceded by the page label.
///
/// Columns are measured in terminal cells, so names in wide scripts stay
/// aligned with their neighbours.
pub fn write_snapshot<W: Write>(
    snapshot: &ViewSnapshot,
    number_format: NumberFormat,
    out: &mut W,
) -> io::Result<()> {
    let rows: Vec<[String; 4]> = snapshot
        .visible_items
        .iter()
        .map(|record| row_cells(record, number_format))
        .collect();

    writeln!(out, "{}", snapshot.page_label())?;

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    for [name, symbol, price, supply] in &rows {
        writeln!(
            out,
            "{}  {}  {}  {}",
            pad(name, widths[0], false),
            pad(symbol, widths[1], false),
            pad(price, widths[2], true),
            supply,
        )?;
    }

    out.flush()
}
