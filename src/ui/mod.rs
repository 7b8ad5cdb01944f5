// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - styles: Static colors, borders and padding
// - file_list: Renders the entry list into plain rows
// - dialogs: Renders the delete confirmation box and builds its overlay
// - compositor: Overlays dialog rows onto the list rows
// - toast: Renders toast notifications (brief pop-up messages)
// - render: Main orchestration function that coordinates all rendering

pub mod compositor;
pub mod dialogs;
pub mod file_list;
pub mod render;
pub mod styles;
pub mod toast;

// Re-export main render function for convenience
pub use render::{compose_frame, render};
