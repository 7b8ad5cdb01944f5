//! Text compositor
//!
//! Overlays pre-rendered dialog lines onto a pre-rendered base view by
//! replacing whole rows. There is no transparency: base rows covered by a
//! dialog are lost for that frame, which is fine because the base view is
//! rebuilt from the model every frame.
//!
//! Overlays are an ordered list applied to one canvas by [`compose`], and
//! every write goes through [`overlay`], which alone enforces that nothing
//! lands outside `[0, base.len())` and that the row count never changes.

use ratatui::text::{Line, Span};

/// Horizontal alignment of overlay rows within the overlay's host width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Fixed left indent, then padded to the host width
    Left { padding: usize },
    /// Centered in the host width
    Center,
}

/// One floating block to draw over the base view
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    /// Base row the overlay is positioned relative to
    pub anchor_row: usize,
    /// Rows between the anchor and the overlay's first row
    pub vertical_offset: usize,
    pub placement: Placement,
    /// Columns each row is aligned within (the block's own computed width)
    pub host_width: usize,
    pub lines: Vec<Line<'static>>,
}

/// First base row an overlay of `overlay_len` rows is written to
///
/// The overlay starts `vertical_offset` rows below `anchor_row`; if it would
/// run past the bottom it is shifted up to end on the last row, and an
/// overlay taller than the base starts at row 0.
///
/// # Examples
/// ```
/// use filetui::ui::compositor::insert_position;
///
/// // Fits: anchor + offset
/// assert_eq!(insert_position(20, 5, 4, 2), 6);
/// // Would overflow: shifted up to end on the last row
/// assert_eq!(insert_position(20, 5, 17, 2), 15);
/// // Taller than the base: pinned at the top
/// assert_eq!(insert_position(3, 5, 0, 2), 0);
/// ```
pub fn insert_position(
    base_len: usize,
    overlay_len: usize,
    anchor_row: usize,
    vertical_offset: usize,
) -> usize {
    let position = anchor_row.saturating_add(vertical_offset);
    if position.saturating_add(overlay_len) > base_len {
        base_len.saturating_sub(overlay_len)
    } else {
        position
    }
}

/// Replace base rows with overlay rows
///
/// Rows are substituted one for one starting at [`insert_position`]; overlay
/// rows that would fall past the last base row are dropped. The result always
/// has exactly `base.len()` rows.
pub fn overlay(
    mut base: Vec<Line<'static>>,
    overlay_lines: Vec<Line<'static>>,
    anchor_row: usize,
    vertical_offset: usize,
) -> Vec<Line<'static>> {
    let start = insert_position(base.len(), overlay_lines.len(), anchor_row, vertical_offset);

    for (i, line) in overlay_lines.into_iter().enumerate() {
        if let Some(slot) = base.get_mut(start + i) {
            *slot = line;
        }
    }

    base
}

/// Align one overlay row within `host_width` columns
pub fn align_line(line: Line<'static>, host_width: usize, placement: Placement) -> Line<'static> {
    let line_width = line.width();

    let (left, right) = match placement {
        Placement::Left { padding } => {
            let right = host_width.saturating_sub(padding + line_width);
            (padding, right)
        }
        Placement::Center => {
            let gap = host_width.saturating_sub(line_width);
            (gap / 2, gap - gap / 2)
        }
    };

    let mut spans = Vec::with_capacity(line.spans.len() + 2);
    if left > 0 {
        spans.push(Span::raw(" ".repeat(left)));
    }
    spans.extend(line.spans);
    if right > 0 {
        spans.push(Span::raw(" ".repeat(right)));
    }

    Line::from(spans)
}

/// Apply overlays in order to a base view
pub fn compose(base: Vec<Line<'static>>, overlays: Vec<Overlay>) -> Vec<Line<'static>> {
    overlays.into_iter().fold(base, |canvas, ov| {
        let aligned = ov
            .lines
            .into_iter()
            .map(|line| align_line(line, ov.host_width, ov.placement))
            .collect();
        overlay(canvas, aligned, ov.anchor_row, ov.vertical_offset)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(n: usize) -> Vec<Line<'static>> {
        (0..n).map(|i| Line::from(format!("row {}", i))).collect()
    }

    fn dialog(n: usize) -> Vec<Line<'static>> {
        (0..n).map(|i| Line::from(format!("dlg {}", i))).collect()
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_overlay_replaces_rows_at_offset() {
        let out = overlay(base(10), dialog(3), 2, 2);
        let rows: Vec<String> = out.iter().map(text).collect();
        assert_eq!(rows[3], "row 3");
        assert_eq!(rows[4], "dlg 0");
        assert_eq!(rows[6], "dlg 2");
        assert_eq!(rows[7], "row 7");
    }

    #[test]
    fn test_overlay_shifts_up_at_bottom() {
        let out = overlay(base(10), dialog(3), 9, 2);
        let rows: Vec<String> = out.iter().map(text).collect();
        assert_eq!(rows[6], "row 6");
        assert_eq!(rows[7], "dlg 0");
        assert_eq!(rows[9], "dlg 2");
    }

    #[test]
    fn test_overlay_taller_than_base_is_clipped() {
        let out = overlay(base(2), dialog(5), 0, 3);
        let rows: Vec<String> = out.iter().map(text).collect();
        assert_eq!(rows, vec!["dlg 0", "dlg 1"]);
    }

    #[test]
    fn test_overlay_onto_empty_base() {
        assert!(overlay(Vec::new(), dialog(3), 0, 2).is_empty());
    }

    #[test]
    fn test_overlay_preserves_line_count() {
        for base_len in 0..12 {
            for dialog_len in 0..8 {
                for anchor in 0..14 {
                    for offset in [2, 3] {
                        let out = overlay(base(base_len), dialog(dialog_len), anchor, offset);
                        assert_eq!(out.len(), base_len);
                        let start = insert_position(base_len, dialog_len, anchor, offset);
                        assert!(start <= base_len);
                    }
                }
            }
        }
    }

    #[test]
    fn test_align_left_with_padding() {
        let line = align_line(Line::from("abc"), 10, Placement::Left { padding: 2 });
        assert_eq!(text(&line), "  abc     ");
        assert_eq!(line.width(), 10);
    }

    #[test]
    fn test_align_center() {
        let line = align_line(Line::from("abcd"), 10, Placement::Center);
        assert_eq!(text(&line), "   abcd   ");
    }

    #[test]
    fn test_align_wider_than_host_keeps_content() {
        let line = align_line(Line::from("abcdef"), 4, Placement::Center);
        assert_eq!(text(&line), "abcdef");
        let line = align_line(Line::from("abcdef"), 4, Placement::Left { padding: 2 });
        assert_eq!(text(&line), "  abcdef");
    }

    #[test]
    fn test_compose_applies_overlays_in_order() {
        let first = Overlay {
            anchor_row: 0,
            vertical_offset: 1,
            placement: Placement::Left { padding: 0 },
            host_width: 6,
            lines: vec![Line::from("first")],
        };
        let second = Overlay {
            anchor_row: 0,
            vertical_offset: 1,
            placement: Placement::Left { padding: 0 },
            host_width: 6,
            lines: vec![Line::from("second")],
        };
        let out = compose(base(4), vec![first, second]);
        assert_eq!(text(&out[1]), "second");
        assert_eq!(out.len(), 4);
    }
}
