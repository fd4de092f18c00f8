//! Text helpers for fitting cell contents into columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` terminal columns, ending with `…`
/// when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Display width of the widest string, or `min` if all are narrower.
pub fn max_width<'a, I>(items: I, min: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().map(|s| s.width()).fold(min, usize::max)
}
