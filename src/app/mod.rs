//! App Orchestration
//!
//! `App` is the interaction state machine. It owns the model and the
//! filesystem capability, consumes one `Msg` at a time and returns the
//! `Command` the event loop should carry out.
//!
//! Methods are kept as `impl App` but organized by functional domain:
//! - file_ops: delete request, confirmation and cancellation

pub(crate) mod file_ops;

use std::sync::Arc;

use crate::config::Config;
use crate::handlers;
use crate::logic::dialog::DialogVariant;
use crate::logic::layout;
use crate::messages::{Command, Msg};
use crate::model::Model;
use crate::services::EntryStore;

pub struct App {
    pub model: Model,
    pub config: Config,
    store: Arc<dyn EntryStore>,
}

impl App {
    pub fn new(config: Config, store: Arc<dyn EntryStore>) -> Self {
        // Until the terminal reports its size, assume the configured list area
        let model = Model::new(config.list_width, config.list_height);
        Self {
            model,
            config,
            store,
        }
    }

    /// Work to do before the first event: load the initial listing
    pub fn init(&self) -> Command {
        Command::RefreshEntries
    }

    /// Handle to the filesystem capability (for background refreshes)
    pub fn store(&self) -> Arc<dyn EntryStore> {
        Arc::clone(&self.store)
    }

    /// Process one event
    pub fn update(&mut self, msg: Msg) -> Command {
        match msg {
            Msg::Key(key) => handlers::keyboard::handle_key(self, key),
            Msg::Resize { width, height } => {
                log::debug!("Resize: {}x{}", width, height);
                self.model.view.resize(width, height);
                Command::None
            }
            Msg::EntriesLoaded(entries) => {
                handlers::entries::handle_entries_loaded(self, entries);
                Command::None
            }
        }
    }

    /// Widest dialog allowed at the current viewport
    pub fn dialog_max_width(&self) -> u16 {
        layout::dialog_max_width(self.config.list_width, self.model.view.viewport_width)
    }

    /// Widest name the confirmation dialog can show at the current viewport
    pub fn max_dialog_content_width(&self) -> u16 {
        layout::max_dialog_content_width(self.dialog_max_width())
    }

    /// Dialog to overlay this frame (None unless Confirming with a selection)
    pub fn current_dialog(&self) -> Option<DialogVariant> {
        if !self.model.view.is_confirming() {
            return None;
        }
        self.model
            .selected_entry()
            .map(|entry| DialogVariant::for_name(&entry.name, self.max_dialog_content_width()))
    }
}
