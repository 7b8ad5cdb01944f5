//! Directory listing handler
//!
//! Applies a finished background listing to the model.

use log::debug;

use crate::model::{Entry, Screen};
use crate::App;

/// Replace the entry list wholesale and clamp the selection
///
/// The active screen is kept, except that a Confirming screen with nothing
/// left to confirm (the directory became empty) falls back to Browsing.
pub fn handle_entries_loaded(app: &mut App, entries: Vec<Entry>) {
    debug!(
        "Entries loaded: {} (was {})",
        entries.len(),
        app.model.entries.len()
    );
    app.model.replace_entries(entries);

    if app.model.selected_entry().is_none() {
        app.model.view.screen = Screen::Browsing;
    }
}
