//! Layout calculation logic
//!
//! Pure functions for sizing the floating confirmation dialog.
//!
//! The dialog must never exceed the list's column budget and never collapse
//! below a usable minimum, whatever the message length.

use unicode_width::UnicodeWidthStr;

/// Columns taken by the dialog border (1 each side) plus inner padding (1 each side)
pub const DIALOG_OVERHEAD: u16 = 4;

/// Smallest dialog width, regardless of content
pub const MIN_DIALOG_WIDTH: u16 = 10;

/// Columns reserved around a file name: border (2), padding (2), slack (2)
pub const DIALOG_NAME_MARGIN: u16 = 6;

/// Compute the width a dialog needs for `content`
///
/// `content` may contain several lines separated by `\n`. The widest line
/// (in display columns) plus `overhead` is clamped so the result is
/// `max(min_width, min(width, max_width))`.
///
/// # Examples
/// ```
/// use filetui::logic::layout::compute_dialog_width;
///
/// // "Delete a.txt?" is 13 columns wide, plus 4 overhead
/// assert_eq!(compute_dialog_width("Delete a.txt?\n\n(y/n)", 10, 30, 4), 17);
///
/// // Empty content collapses to the minimum
/// assert_eq!(compute_dialog_width("", 10, 30, 4), 10);
///
/// // Long content is capped at the maximum
/// assert_eq!(compute_dialog_width(&"x".repeat(80), 10, 30, 4), 30);
/// ```
pub fn compute_dialog_width(content: &str, min_width: u16, max_width: u16, overhead: u16) -> u16 {
    let widest = content
        .split('\n')
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);

    let width = u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(overhead);

    width.min(max_width).max(min_width)
}

/// Widest dialog allowed: the list's column budget, never wider than the terminal
///
/// # Examples
/// ```
/// use filetui::logic::layout::dialog_max_width;
///
/// assert_eq!(dialog_max_width(30, 120), 30);
/// assert_eq!(dialog_max_width(30, 20), 20);
/// ```
pub fn dialog_max_width(list_width: u16, viewport_width: u16) -> u16 {
    list_width.min(viewport_width)
}

/// Widest file name the confirmation dialog can show without breaking its box
///
/// # Examples
/// ```
/// use filetui::logic::layout::max_dialog_content_width;
///
/// assert_eq!(max_dialog_content_width(30), 24);
/// assert_eq!(max_dialog_content_width(4), 0);
/// ```
pub fn max_dialog_content_width(dialog_max_width: u16) -> u16 {
    dialog_max_width.saturating_sub(DIALOG_NAME_MARGIN)
}

/// Whether `name` is too wide to be confirmed safely
///
/// Measured in display columns, so wide characters count double.
///
/// # Examples
/// ```
/// use filetui::logic::layout::is_name_too_long;
///
/// assert!(!is_name_too_long("a.txt", 24));
/// assert!(!is_name_too_long(&"a".repeat(24), 24));
/// assert!(is_name_too_long(&"a".repeat(25), 24));
/// ```
pub fn is_name_too_long(name: &str, max_content_width: u16) -> bool {
    name.width() > usize::from(max_content_width)
}
