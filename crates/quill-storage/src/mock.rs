//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;

use crate::storage::{Entry, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores documents and directory names in memory. Use the builder methods
/// to configure the mock with test data. Scan order is insertion order,
/// which makes listing-order assertions deterministic.
///
/// # Example
///
/// ```ignore
/// use quill_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("first-post", "---\ntitle: First\n---\nHello")
///     .with_dir("posts");
///
/// let entries = storage.scan().unwrap();
/// let content = storage.read("first-post").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    entries: Vec<Entry>,
    contents: HashMap<String, String>,
    dirs: Vec<String>,
    scan_fails: bool,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with the given id and raw content.
    ///
    /// The file name is derived as `<id>.md`.
    #[must_use]
    pub fn with_file(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        let id = id.into();
        self.entries.push(Entry {
            file_name: format!("{id}.md"),
            id: id.clone(),
        });
        self.contents.insert(id, content.into());
        self
    }

    /// Add a first-level directory name.
    #[must_use]
    pub fn with_dir(mut self, name: impl Into<String>) -> Self {
        self.dirs.push(name.into());
        self
    }

    /// Make `scan()` and `scan_dirs()` fail with an I/O-class error.
    #[must_use]
    pub fn with_scan_failure(mut self) -> Self {
        self.scan_fails = true;
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<Entry>, StorageError> {
        if self.scan_fails {
            return Err(StorageError::new(StorageErrorKind::Other).with_backend(BACKEND));
        }
        Ok(self.entries.clone())
    }

    fn read(&self, id: &str) -> Result<String, StorageError> {
        self.contents
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::not_found(id).with_backend(BACKEND))
    }

    fn exists(&self, id: &str) -> bool {
        self.contents.contains_key(id)
    }

    fn scan_dirs(&self) -> Result<Vec<String>, StorageError> {
        if self.scan_fails {
            return Err(StorageError::new(StorageErrorKind::Other).with_backend(BACKEND));
        }
        Ok(self.dirs.clone())
    }
}
