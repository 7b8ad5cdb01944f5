//! File operation methods
//!
//! The delete flow: open the confirmation screen, then either remove the
//! selected entry or return to browsing untouched.

use log::{info, warn};

use crate::logic::{self, layout};
use crate::messages::Command;
use crate::model::Screen;
use crate::App;

impl App {
    /// Open the delete confirmation for the selected entry
    pub(crate) fn request_delete(&mut self) {
        // Nothing selected (empty directory) - nothing to confirm
        if self.model.selected_entry().is_none() {
            return;
        }
        self.model.view.screen = Screen::Confirming;
    }

    /// User answered yes: remove the selected entry unless its name cannot be shown safely
    pub(crate) fn confirm_delete(&mut self) -> Command {
        self.model.view.screen = Screen::Browsing;

        let Some(entry) = self.model.selected_entry() else {
            return Command::None;
        };
        let name = entry.name.clone();

        if layout::is_name_too_long(&name, self.max_dialog_content_width()) {
            info!("Skipping delete of {:?}: name too long to confirm", name);
            self.model
                .show_toast("Skipped: name too long to confirm".to_string());
            return Command::None;
        }

        match self.store.remove_entry(&name) {
            Ok(()) => {
                info!("Deleted {:?}", name);
                self.model.show_toast(format!("Deleted: {}", name));
            }
            Err(e) => {
                warn!(
                    "Failed to delete {:?} ({:?}): {:#}",
                    name,
                    logic::errors::classify_error(&e),
                    e
                );
                self.model.show_toast(format!(
                    "Error: Failed to delete {}: {}",
                    name,
                    logic::errors::format_error_message(&e)
                ));
            }
        }

        // Refresh after every removal attempt, successful or not
        Command::RefreshEntries
    }

    /// User answered no (or pressed Esc)
    pub(crate) fn cancel_delete(&mut self) {
        self.model.view.screen = Screen::Browsing;
    }
}
