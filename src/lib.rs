//! File Manager TUI Library
//!
//! Exposes modules for the binary and for testing

pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod messages;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
pub use messages::{Command, Msg};
