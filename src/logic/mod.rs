//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - dialog: Confirmation dialog variants, content and text layout
//! - errors: Classification and formatting of removal errors
//! - layout: Dialog width calculation and name budget
//! - navigation: Selection movement and clamping
//! - ui: Toast timing

pub mod dialog;
pub mod errors;
pub mod layout;
pub mod navigation;
pub mod ui;
