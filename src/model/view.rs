//! View State
//!
//! This sub-model contains the interaction state of the browser:
//! active screen, selection, and viewport dimensions.

use super::types::Screen;
use crate::logic;

/// Screen, selection and viewport (owned by the state machine)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// Active screen (Browsing or Confirming)
    pub screen: Screen,

    /// Selected entry (None when the entry list is empty)
    pub selected_index: Option<usize>,

    /// Terminal width in cells
    pub viewport_width: u16,

    /// Terminal height in cells
    pub viewport_height: u16,
}

impl ViewState {
    /// Create initial view state with the given viewport
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            screen: Screen::Browsing,
            selected_index: None,
            viewport_width,
            viewport_height,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Re-establish the selection invariant after the list changed length
    pub fn clamp_selection(&mut self, list_len: usize) {
        self.selected_index = logic::navigation::clamp_selection(self.selected_index, list_len);
    }

    pub fn select_next(&mut self, list_len: usize) {
        self.selected_index = logic::navigation::next_selection(self.selected_index, list_len);
    }

    pub fn select_prev(&mut self, list_len: usize) {
        self.selected_index = logic::navigation::prev_selection(self.selected_index, list_len);
    }

    pub fn select_first(&mut self, list_len: usize) {
        self.selected_index = if list_len == 0 { None } else { Some(0) };
    }

    pub fn select_last(&mut self, list_len: usize) {
        self.selected_index = list_len.checked_sub(1);
    }

    pub fn is_confirming(&self) -> bool {
        self.screen == Screen::Confirming
    }
}
