//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **entries**: the current directory listing (replaced on every refresh)
//! - **ViewState**: screen, selection, viewport
//! - **UiModel**: toasts and the quit flag
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod types;
pub mod ui;
pub mod view;

pub use types::*;
pub use ui::UiModel;
pub use view::ViewState;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Current directory entries, in directory-iteration order
    pub entries: Vec<Entry>,

    /// Screen, selection and viewport
    pub view: ViewState,

    /// Toasts and quit flag
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with an empty listing
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            entries: Vec::new(),
            view: ViewState::new(viewport_width, viewport_height),
            ui: UiModel::new(),
        }
    }

    /// Get currently selected entry (if any)
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.view
            .selected_index
            .and_then(|idx| self.entries.get(idx))
    }

    /// Replace the listing and clamp the selection to it
    pub fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        if self.view.selected_index.is_none() && !self.entries.is_empty() {
            self.view.selected_index = Some(0);
        }
        self.view.clamp_selection(self.entries.len());
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
