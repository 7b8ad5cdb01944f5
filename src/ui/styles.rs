//! Presentation styles
//!
//! Static colors, borders and padding shared by the list view, the dialog
//! box and the compositor. Horizontal dialog chrome here must add up to
//! `logic::layout::DIALOG_OVERHEAD` (one border plus one padding column per side).

use ratatui::{
    style::{Color, Modifier, Style},
    symbols::border,
};

/// Accent used for the dialog border and text
pub const DIALOG_COLOR: Color = Color::Indexed(205);

/// Rounded box drawn around dialogs
pub const DIALOG_BORDER: border::Set = border::ROUNDED;

/// Blank columns between the dialog border and its text (each side)
pub const DIALOG_HORIZONTAL_PADDING: usize = 1;

/// Blank rows between the dialog border and its text (top and bottom)
pub const DIALOG_VERTICAL_PADDING: usize = 1;

/// Left indent of the standard confirm dialog inside the list
pub const CONFIRM_DIALOG_LEFT_PADDING: usize = 2;

/// Left margin of the list title and rows
pub const LIST_MARGIN_LEFT: usize = 2;

/// Marker drawn left of the selected entry
pub const SELECTED_MARKER: &str = "│ ";

pub fn dialog_style() -> Style {
    Style::default()
        .fg(DIALOG_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Indexed(230))
        .bg(Color::Indexed(62))
}

pub fn status_style() -> Style {
    Style::default().fg(Color::Indexed(241))
}

pub fn entry_title_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Indexed(170))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Indexed(252))
    }
}

pub fn entry_description_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Indexed(169))
    } else {
        Style::default().fg(Color::Indexed(245))
    }
}

pub fn selected_marker_style() -> Style {
    Style::default().fg(Color::Indexed(170))
}

pub fn pager_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Indexed(252))
    } else {
        Style::default().fg(Color::Indexed(238))
    }
}

pub fn help_style() -> Style {
    Style::default().fg(Color::Indexed(241))
}
