use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles::{
    entry_description_style, entry_title_style, help_style, pager_style, selected_marker_style,
    status_style, title_style, LIST_MARGIN_LEFT, SELECTED_MARKER,
};
use crate::model::Entry;

/// Rows above the first entry: title, blank, item count, blank
pub const HEADER_ROWS: usize = 4;

/// Rows below the entries: page dots, help
pub const FOOTER_ROWS: usize = 2;

/// Rows per entry: title, description, spacer
pub const ENTRY_ROWS: usize = 3;

const HELP_TEXT: &str = "↑/k up • ↓/j down • d delete • q quit";

/// The list rendered as plain rows, ready for compositing
#[derive(Debug, Clone)]
pub struct ListView {
    /// Exactly `height` rows
    pub lines: Vec<Line<'static>>,
    /// Row of the selected entry's title (None if nothing selected or off-screen)
    pub anchor_row: Option<usize>,
}

/// Number of entries that fit on one page
pub fn entries_per_page(height: usize) -> usize {
    (height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) / ENTRY_ROWS).max(1)
}

/// Render the entry list into `height` rows of at most `width` columns
///
/// Entries are paged so the selected one is always on the visible page.
pub fn render_list_lines(
    entries: &[Entry],
    selected: Option<usize>,
    title: &str,
    width: u16,
    height: u16,
) -> ListView {
    let width = usize::from(width);
    let height = usize::from(height);
    let per_page = entries_per_page(height);
    let page = selected.unwrap_or(0) / per_page;
    let total_pages = entries.len().div_ceil(per_page).max(1);
    let page_start = page * per_page;

    let margin = " ".repeat(LIST_MARGIN_LEFT);
    let text_width = width.saturating_sub(LIST_MARGIN_LEFT);

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(height);

    // Header
    lines.push(Line::from(vec![
        Span::raw(margin.clone()),
        Span::styled(
            format!(" {} ", truncate_to_width(title, text_width.saturating_sub(2))),
            title_style(),
        ),
    ]));
    lines.push(Line::default());
    let count = match entries.len() {
        0 => "No items.".to_string(),
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    };
    lines.push(Line::from(vec![
        Span::raw(margin.clone()),
        Span::styled(count, status_style()),
    ]));
    lines.push(Line::default());

    // Entries on the current page
    let mut anchor_row = None;
    for (idx, entry) in entries.iter().enumerate().skip(page_start).take(per_page) {
        let is_selected = selected == Some(idx);
        if is_selected {
            anchor_row = Some(lines.len());
        }

        let prefix = if is_selected {
            Span::styled(SELECTED_MARKER, selected_marker_style())
        } else {
            Span::raw(margin.clone())
        };

        lines.push(Line::from(vec![
            prefix.clone(),
            Span::styled(
                truncate_to_width(&entry.name, text_width),
                entry_title_style(is_selected),
            ),
        ]));
        lines.push(Line::from(vec![
            prefix,
            Span::styled(
                truncate_to_width(&entry.description, text_width),
                entry_description_style(is_selected),
            ),
        ]));
        lines.push(Line::default());
    }

    // Body fills everything above the footer
    lines.resize(height.saturating_sub(FOOTER_ROWS), Line::default());

    lines.push(pager_line(page, total_pages, &margin));
    lines.push(Line::from(vec![
        Span::raw(margin),
        Span::styled(truncate_to_width(HELP_TEXT, text_width), help_style()),
    ]));
    lines.truncate(height);

    // Anchor may have been cut off by a very short viewport
    let anchor_row = anchor_row.filter(|row| *row < lines.len());

    ListView { lines, anchor_row }
}

fn pager_line(page: usize, total_pages: usize, margin: &str) -> Line<'static> {
    if total_pages <= 1 {
        return Line::default();
    }

    let mut spans = vec![Span::raw(margin.to_string())];
    for p in 0..total_pages {
        spans.push(Span::styled("•", pager_style(p == page)));
    }
    Line::from(spans)
}

/// Shorten `text` to at most `max_width` columns, ending in `…` when cut
///
/// # Examples
/// ```
/// use filetui::ui::file_list::truncate_to_width;
///
/// assert_eq!(truncate_to_width("a.txt", 10), "a.txt");
/// assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
/// assert_eq!(truncate_to_width("abc", 0), "");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
