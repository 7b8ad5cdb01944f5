//! Tests for the filesystem-backed entry store
//!
//! Listing must describe files by size and directories by kind, and removal
//! must only ever touch the single named entry (never recursive).

use std::fs;

use filetui::model::Entry;
use filetui::services::{EntryStore, FsEntryStore};

fn sorted(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Test: files and directories are listed with their descriptions
#[test]
fn test_lists_files_and_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"0123456789ab").unwrap();
    fs::write(dir.path().join("empty.log"), b"").unwrap();
    fs::create_dir(dir.path().join("dir1")).unwrap();

    let store = FsEntryStore::new(dir.path());
    let entries = sorted(store.list_entries());

    assert_eq!(
        entries,
        vec![
            Entry::file("a.txt", 12),
            Entry::directory("dir1"),
            Entry::file("empty.log", 0),
        ]
    );
}

/// Test: nested contents are not listed
#[test]
fn test_listing_is_not_recursive() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("outer")).unwrap();
    fs::write(dir.path().join("outer").join("inner.txt"), b"x").unwrap();

    let store = FsEntryStore::new(dir.path());

    assert_eq!(store.list_entries(), vec![Entry::directory("outer")]);
}

/// Test: an empty directory lists nothing
#[test]
fn test_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsEntryStore::new(dir.path());

    assert!(store.list_entries().is_empty());
}

/// Test: removing a file takes it out of the next listing
#[test]
fn test_remove_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    fs::write(dir.path().join("b.txt"), b"world").unwrap();

    let store = FsEntryStore::new(dir.path());
    store.remove_entry("a.txt").unwrap();

    assert_eq!(store.list_entries(), vec![Entry::file("b.txt", 5)]);
}

/// Test: an empty directory can be removed
#[test]
fn test_remove_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("dir1")).unwrap();

    let store = FsEntryStore::new(dir.path());
    store.remove_entry("dir1").unwrap();

    assert!(!dir.path().join("dir1").exists());
}

/// Test: a non-empty directory is left alone and the error names it
#[test]
fn test_remove_non_empty_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("dir1")).unwrap();
    fs::write(dir.path().join("dir1").join("keep.txt"), b"keep").unwrap();

    let store = FsEntryStore::new(dir.path());
    let err = store.remove_entry("dir1").unwrap_err();

    assert!(format!("{:#}", err).contains("dir1"));
    assert!(dir.path().join("dir1").join("keep.txt").exists());
}

/// Test: a symlink to a directory is unlinked and its target left alone
#[cfg(unix)]
#[test]
fn test_symlink_to_directory_removed_as_link() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("target");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), b"keep").unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("link")).unwrap();

    let store = FsEntryStore::new(dir.path());
    assert!(store.list_entries().iter().any(|e| e.name == "link"));

    store.remove_entry("link").unwrap();

    assert!(fs::symlink_metadata(dir.path().join("link")).is_err());
    assert!(target.join("keep.txt").exists());
    assert_eq!(store.list_entries(), vec![Entry::directory("target")]);
}
