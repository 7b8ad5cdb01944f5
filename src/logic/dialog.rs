//! Confirmation dialog content
//!
//! Pure functions that decide what the delete dialog says and how its text
//! is laid out inside the box. Drawing the box itself lives in `ui::dialogs`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::layout::{compute_dialog_width, is_name_too_long, DIALOG_OVERHEAD};

/// Rows between the selected entry's first row and the standard dialog's top
pub const CONFIRM_DIALOG_OFFSET: usize = 2;

/// The "name too long" dialog has more text above its prompt, so it sits lower
pub const TOO_LONG_DIALOG_OFFSET: usize = 3;

/// Which dialog the Confirming screen shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogVariant {
    /// Standard `Delete <name>?` / `(y/n)` prompt
    Confirm { name: String },
    /// Explanation shown instead of a prompt when the name cannot fit
    NameTooLong,
}

impl DialogVariant {
    /// Pick the variant for a selected entry name
    ///
    /// # Examples
    /// ```
    /// use filetui::logic::dialog::DialogVariant;
    ///
    /// assert_eq!(
    ///     DialogVariant::for_name("a.txt", 24),
    ///     DialogVariant::Confirm { name: "a.txt".to_string() }
    /// );
    /// assert_eq!(DialogVariant::for_name(&"x".repeat(40), 24), DialogVariant::NameTooLong);
    /// ```
    pub fn for_name(name: &str, max_content_width: u16) -> Self {
        if is_name_too_long(name, max_content_width) {
            DialogVariant::NameTooLong
        } else {
            DialogVariant::Confirm {
                name: name.to_string(),
            }
        }
    }

    /// Text lines of the dialog, before layout
    pub fn content_lines(&self) -> Vec<String> {
        match self {
            DialogVariant::Confirm { name } => {
                vec![format!("Delete {}?", name), String::new(), "(y/n)".to_string()]
            }
            DialogVariant::NameTooLong => vec![
                "File name too long".to_string(),
                "for confirmation dialog".to_string(),
                String::new(),
                "(press esc)".to_string(),
            ],
        }
    }

    /// Rows below the anchor row where the dialog starts
    pub fn vertical_offset(&self) -> usize {
        match self {
            DialogVariant::Confirm { .. } => CONFIRM_DIALOG_OFFSET,
            DialogVariant::NameTooLong => TOO_LONG_DIALOG_OFFSET,
        }
    }
}

/// Dialog text plus its width bounds (recomputed every frame)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogSpec {
    pub content_lines: Vec<String>,
    pub min_width: u16,
    pub max_width: u16,
}

impl DialogSpec {
    pub fn new(variant: &DialogVariant, min_width: u16, max_width: u16) -> Self {
        Self {
            content_lines: variant.content_lines(),
            min_width,
            max_width,
        }
    }

    /// Total dialog width including border and padding
    pub fn width(&self) -> u16 {
        compute_dialog_width(
            &self.content_lines.join("\n"),
            self.min_width,
            self.max_width,
            DIALOG_OVERHEAD,
        )
    }

    /// Columns available for text inside border and padding
    pub fn inner_width(&self) -> u16 {
        self.width().saturating_sub(DIALOG_OVERHEAD)
    }

    /// Text rows laid out for the box interior
    ///
    /// Lines too wide for the interior are hard-wrapped, the block is
    /// centered on its widest row, then every row is padded to exactly
    /// `inner_width` columns so the box edges line up.
    pub fn layout_lines(&self) -> Vec<String> {
        let inner = usize::from(self.inner_width());

        let wrapped: Vec<String> = self
            .content_lines
            .iter()
            .flat_map(|line| wrap_to_width(line, inner))
            .collect();

        let block_width = wrapped.iter().map(|l| l.width()).max().unwrap_or(0);

        wrapped
            .into_iter()
            .map(|line| {
                let centered = center_in(&line, block_width);
                pad_right(&centered, inner)
            })
            .collect()
    }
}

/// Split `line` into rows of at most `width` display columns
///
/// A single character wider than `width` still gets its own row.
///
/// # Examples
/// ```
/// use filetui::logic::dialog::wrap_to_width;
///
/// assert_eq!(wrap_to_width("abcdef", 4), vec!["abcd", "ef"]);
/// assert_eq!(wrap_to_width("", 4), vec![""]);
/// ```
pub fn wrap_to_width(line: &str, width: usize) -> Vec<String> {
    if width == 0 || line.width() <= width {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

/// Center `text` in `width` columns (extra column goes right)
pub fn center_in(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(text.width());
    let left = gap / 2;
    let right = gap - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Pad `text` with trailing spaces up to `width` columns
pub fn pad_right(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(gap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::layout::MIN_DIALOG_WIDTH;

    #[test]
    fn test_confirm_content() {
        let variant = DialogVariant::Confirm {
            name: "a.txt".to_string(),
        };
        assert_eq!(variant.content_lines(), vec!["Delete a.txt?", "", "(y/n)"]);
        assert_eq!(variant.vertical_offset(), 2);
    }

    #[test]
    fn test_too_long_sits_lower_than_confirm() {
        let confirm = DialogVariant::Confirm {
            name: "x".to_string(),
        };
        assert!(DialogVariant::NameTooLong.vertical_offset() > confirm.vertical_offset());
    }

    #[test]
    fn test_name_at_budget_is_confirmable() {
        let name = "a".repeat(24);
        assert!(matches!(
            DialogVariant::for_name(&name, 24),
            DialogVariant::Confirm { .. }
        ));
    }

    #[test]
    fn test_spec_width_for_short_name() {
        let spec = DialogSpec::new(
            &DialogVariant::Confirm {
                name: "a.txt".to_string(),
            },
            MIN_DIALOG_WIDTH,
            30,
        );
        assert_eq!(spec.width(), 17);
        assert_eq!(spec.inner_width(), 13);
    }

    #[test]
    fn test_layout_lines_have_uniform_width() {
        let spec = DialogSpec::new(&DialogVariant::NameTooLong, MIN_DIALOG_WIDTH, 30);
        let inner = usize::from(spec.inner_width());
        let lines = spec.layout_lines();

        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(line.width(), inner);
        }
        // Shorter rows are centered on the widest one
        assert_eq!(lines[3].trim(), "(press esc)");
        assert!(lines[3].starts_with("      "));
    }

    #[test]
    fn test_layout_wraps_prompt_wider_than_box() {
        // 24-char name: "Delete <name>?" is 32 columns, box interior is 26
        let name = "b".repeat(24);
        let spec = DialogSpec::new(&DialogVariant::Confirm { name }, MIN_DIALOG_WIDTH, 30);
        let lines = spec.layout_lines();

        assert_eq!(spec.width(), 30);
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(line.width(), 26);
        }
    }

    #[test]
    fn test_minimum_width_left_aligns_block() {
        let spec = DialogSpec {
            content_lines: vec!["ok".to_string()],
            min_width: 10,
            max_width: 30,
        };
        assert_eq!(spec.layout_lines(), vec!["ok    "]);
    }

    #[test]
    fn test_wrap_wide_char_in_narrow_width() {
        assert_eq!(wrap_to_width("日本", 1), vec!["日", "本"]);
    }

    #[test]
    fn test_center_in() {
        assert_eq!(center_in("ab", 5), " ab  ");
        assert_eq!(center_in("abc", 2), "abc");
    }
}
