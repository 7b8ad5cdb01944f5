use ratatui::{text::Line, widgets::Paragraph, Frame};

use super::{compositor, dialogs, file_list, toast};
use crate::logic::layout::MIN_DIALOG_WIDTH;
use crate::App;

/// Build the full frame as rows: the list, plus the delete dialog when confirming
///
/// Pure with respect to the terminal, so it can be inspected in tests.
pub fn compose_frame(app: &App) -> Vec<Line<'static>> {
    let view = &app.model.view;
    let list = file_list::render_list_lines(
        &app.model.entries,
        view.selected_index,
        &app.config.title,
        view.viewport_width,
        view.viewport_height,
    );

    let dialog_max_width = app.dialog_max_width();

    let mut overlays = Vec::new();
    if let Some(variant) = app.current_dialog() {
        // A selection pushed off a tiny viewport still gets its dialog, pinned to the top
        let anchor_row = list.anchor_row.unwrap_or(0);
        overlays.push(dialogs::delete_dialog_overlay(
            &variant,
            anchor_row,
            MIN_DIALOG_WIDTH,
            dialog_max_width,
        ));
    }

    compositor::compose(list.lines, overlays)
}

/// Main render function - draws one frame
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    f.render_widget(Paragraph::new(compose_frame(app)), area);

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, area, message);
    }
}
