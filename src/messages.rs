//! Message types for the Elm Architecture pattern
//!
//! Every event the browser reacts to is a `Msg`. Messages flow into
//! `App::update` one at a time, mutate the model, and produce a `Command`
//! that the event loop carries out (quit, or spawn a directory refresh).
//!
//! Message sources:
//! - User input (keyboard events)
//! - Terminal resize
//! - Background tasks (directory listing)

use crossterm::event::KeyEvent;

use crate::model::Entry;

/// Unified message type for all application events
#[derive(Debug, Clone)]
pub enum Msg {
    /// User pressed a key
    Key(KeyEvent),

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// A directory listing finished in the background
    EntriesLoaded(Vec<Entry>),
}

/// Follow-up work requested by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do
    None,

    /// Leave the event loop
    Quit,

    /// Re-read the directory asynchronously
    RefreshEntries,
}
