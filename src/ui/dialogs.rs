use ratatui::text::{Line, Span};

use super::compositor::{Overlay, Placement};
use super::styles::{
    dialog_style, CONFIRM_DIALOG_LEFT_PADDING, DIALOG_BORDER, DIALOG_HORIZONTAL_PADDING,
    DIALOG_VERTICAL_PADDING,
};
use crate::logic::dialog::{DialogSpec, DialogVariant};

/// Render a dialog spec into boxed rows, each exactly `spec.width()` columns wide
pub fn render_dialog_box(spec: &DialogSpec) -> Vec<Line<'static>> {
    let style = dialog_style();
    let span_width = usize::from(spec.width()).saturating_sub(2);
    let padding = " ".repeat(DIALOG_HORIZONTAL_PADDING);

    let edge = |left: &str, fill: &str, right: &str| {
        Line::from(Span::styled(
            format!("{}{}{}", left, fill.repeat(span_width), right),
            style,
        ))
    };
    let body = |text: &str| {
        Line::from(Span::styled(
            format!(
                "{}{}{}{}{}",
                DIALOG_BORDER.vertical_left, padding, text, padding, DIALOG_BORDER.vertical_right
            ),
            style,
        ))
    };

    let mut lines = Vec::new();
    lines.push(edge(
        DIALOG_BORDER.top_left,
        DIALOG_BORDER.horizontal_top,
        DIALOG_BORDER.top_right,
    ));
    for _ in 0..DIALOG_VERTICAL_PADDING {
        lines.push(edge(DIALOG_BORDER.vertical_left, " ", DIALOG_BORDER.vertical_right));
    }
    for text in spec.layout_lines() {
        lines.push(body(&text));
    }
    for _ in 0..DIALOG_VERTICAL_PADDING {
        lines.push(edge(DIALOG_BORDER.vertical_left, " ", DIALOG_BORDER.vertical_right));
    }
    lines.push(edge(
        DIALOG_BORDER.bottom_left,
        DIALOG_BORDER.horizontal_bottom,
        DIALOG_BORDER.bottom_right,
    ));

    lines
}

/// Build the delete-confirmation overlay for the selected entry
///
/// The standard prompt is indented from the left edge of the list; the
/// "name too long" explanation is centered within the dialog's own width,
/// which leaves the box flush with the left edge.
pub fn delete_dialog_overlay(
    variant: &DialogVariant,
    anchor_row: usize,
    min_width: u16,
    max_width: u16,
) -> Overlay {
    let spec = DialogSpec::new(variant, min_width, max_width);

    let placement = match variant {
        DialogVariant::Confirm { .. } => Placement::Left {
            padding: CONFIRM_DIALOG_LEFT_PADDING,
        },
        DialogVariant::NameTooLong => Placement::Center,
    };

    Overlay {
        anchor_row,
        vertical_offset: variant.vertical_offset(),
        placement,
        host_width: usize::from(spec.width()),
        lines: render_dialog_box(&spec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::layout::MIN_DIALOG_WIDTH;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_confirm_box_shape() {
        let spec = DialogSpec::new(
            &DialogVariant::Confirm {
                name: "a.txt".to_string(),
            },
            MIN_DIALOG_WIDTH,
            30,
        );
        let rows: Vec<String> = render_dialog_box(&spec).iter().map(text).collect();

        // border + padding + 3 text rows + padding + border
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "╭───────────────╮");
        assert_eq!(rows[1], "│               │");
        assert_eq!(rows[2], "│ Delete a.txt? │");
        assert_eq!(rows[4], "│     (y/n)     │");
        assert_eq!(rows[6], "╰───────────────╯");
    }

    #[test]
    fn test_every_row_has_dialog_width() {
        for variant in [
            DialogVariant::Confirm {
                name: "x".repeat(24),
            },
            DialogVariant::NameTooLong,
        ] {
            let spec = DialogSpec::new(&variant, MIN_DIALOG_WIDTH, 30);
            for line in render_dialog_box(&spec) {
                assert_eq!(line.width(), usize::from(spec.width()));
            }
        }
    }

    #[test]
    fn test_overlay_placement_per_variant() {
        let confirm = delete_dialog_overlay(
            &DialogVariant::Confirm {
                name: "a.txt".to_string(),
            },
            4,
            MIN_DIALOG_WIDTH,
            30,
        );
        assert_eq!(confirm.placement, Placement::Left { padding: 2 });
        assert_eq!(confirm.vertical_offset, 2);

        let too_long = delete_dialog_overlay(&DialogVariant::NameTooLong, 4, MIN_DIALOG_WIDTH, 30);
        assert_eq!(too_long.placement, Placement::Center);
        assert_eq!(too_long.vertical_offset, 3);
        // "for confirmation dialog" (23) plus chrome (4)
        assert_eq!(too_long.host_width, 27);
        assert!(text(&too_long.lines[2]).contains("File name too long"));
    }

    #[test]
    fn test_dialog_styled_with_accent() {
        let spec = DialogSpec::new(&DialogVariant::NameTooLong, MIN_DIALOG_WIDTH, 30);
        for line in render_dialog_box(&spec) {
            for span in &line.spans {
                assert_eq!(span.style, dialog_style());
            }
        }
    }
}
