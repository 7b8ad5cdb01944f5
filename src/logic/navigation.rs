//! Navigation selection logic
//!
//! Pure functions for moving the list selection (with wrap-around) and for
//! keeping a selection valid after the listing is replaced.

/// Calculate the next selection index with wrapping
///
/// Moves down one entry, wrapping from the last entry back to the first.
/// With no selection, the first entry is selected.
///
/// # Examples
/// ```
/// use filetui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// Moves up one entry, wrapping from the first entry to the last.
/// With no selection (or a stale one past the end), the last entry is selected.
///
/// # Examples
/// ```
/// use filetui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i > 0 && i < list_len => i - 1,
        _ => list_len - 1,
    })
}

/// Clamp a selection to a list that may have changed length
///
/// Applied after every directory refresh. An empty list has no selection,
/// a selection past the end moves to the last entry, a valid one is kept.
///
/// # Examples
/// ```
/// use filetui::logic::navigation::clamp_selection;
///
/// assert_eq!(clamp_selection(Some(1), 3), Some(1));
/// assert_eq!(clamp_selection(Some(5), 3), Some(2));
/// assert_eq!(clamp_selection(Some(0), 0), None);
/// assert_eq!(clamp_selection(None, 3), None);
/// ```
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    current.map(|i| i.min(list_len - 1))
}
