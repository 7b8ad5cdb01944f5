//! External Services
//!
//! This module contains services that interact with external systems:
//! - fs: Directory listing and entry removal

pub mod fs;

// Re-export commonly used types for convenience
pub use fs::{spawn_refresh, EntryStore, FsEntryStore};
