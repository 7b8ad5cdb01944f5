//! Filesystem service
//!
//! The browser's only contact with the disk: listing the current directory
//! and removing a single entry. Listing runs off the event loop and reports
//! back with one `Msg::EntriesLoaded`.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::messages::Msg;
use crate::model::Entry;

/// Directory listing and removal capability
pub trait EntryStore: Send + Sync {
    /// Entries of the directory in iteration order.
    ///
    /// Never fails: an unreadable directory yields an empty list.
    fn list_entries(&self) -> Vec<Entry>;

    /// Remove one entry by name (non-recursive)
    fn remove_entry(&self, name: &str) -> Result<()>;
}

/// `EntryStore` backed by a real directory
#[derive(Debug, Clone)]
pub struct FsEntryStore {
    root: PathBuf,
}

impl FsEntryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl EntryStore for FsEntryStore {
    fn list_entries(&self) -> Vec<Entry> {
        let read_dir = match fs::read_dir(&self.root) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warn!("Failed to read directory {:?}: {}", self.root, e);
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let Ok(dir_entry) = dir_entry else {
                continue;
            };

            // Entries whose metadata vanished mid-listing are skipped
            let metadata = match dir_entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    debug!("Skipping {:?}: {}", dir_entry.file_name(), e);
                    continue;
                }
            };

            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if metadata.is_dir() {
                entries.push(Entry::directory(name));
            } else {
                entries.push(Entry::file(name, metadata.len()));
            }
        }

        debug!("Listed {} entries in {:?}", entries.len(), self.root);
        entries
    }

    fn remove_entry(&self, name: &str) -> Result<()> {
        let path = self.root.join(name);

        let metadata = fs::symlink_metadata(&path)
            .with_context(|| format!("Failed to stat {}", name))?;

        if metadata.is_dir() {
            fs::remove_dir(&path).with_context(|| format!("Failed to remove directory {}", name))?;
        } else {
            fs::remove_file(&path).with_context(|| format!("Failed to remove file {}", name))?;
        }

        debug!("Removed {:?}", path);
        Ok(())
    }
}

/// List the directory on the blocking pool and send one `EntriesLoaded`
///
/// Refreshes are neither deduplicated nor cancelled; a second request simply
/// produces a second (identical) listing.
pub fn spawn_refresh(
    store: Arc<dyn EntryStore>,
    tx: mpsc::UnboundedSender<Msg>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let entries = match tokio::task::spawn_blocking(move || store.list_entries()).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Directory listing task failed: {}", e);
                Vec::new()
            }
        };

        if tx.send(Msg::EntriesLoaded(entries)).is_err() {
            debug!("Dropping directory listing: receiver closed");
        }
    })
}
