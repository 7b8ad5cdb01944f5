//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

/// One directory listing row (file or subdirectory)
///
/// Entries are rebuilt wholesale on every refresh, so identity is the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub description: String, // "Directory" or "Size: <n> bytes"
}

impl Entry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Build an entry for a directory
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, "Directory")
    }

    /// Build an entry for a file of `size` bytes
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::new(name, format!("Size: {} bytes", size))
    }
}

/// The browser's current interaction mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Plain list view, navigation and delete requests
    #[default]
    Browsing,
    /// Delete confirmation dialog overlaid on the list
    Confirming,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_description() {
        let entry = Entry::file("a.txt", 42);
        assert_eq!(entry.description, "Size: 42 bytes");
    }

    #[test]
    fn test_directory_entry_description() {
        let entry = Entry::directory("dir1");
        assert_eq!(entry.description, "Directory");
    }

    #[test]
    fn test_screen_defaults_to_browsing() {
        assert_eq!(Screen::default(), Screen::Browsing);
    }
}
