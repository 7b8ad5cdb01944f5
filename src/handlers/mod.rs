//! Event Handlers
//!
//! This module contains handlers for the events `App::update` receives:
//! - keyboard: User keyboard input, dispatched per screen
//! - entries: Directory listings from the background refresh
//!
//! Resize needs no handler; it only updates the viewport.

pub mod entries;
pub mod keyboard;

// Re-export for convenience
pub use entries::handle_entries_loaded;
pub use keyboard::handle_key;
