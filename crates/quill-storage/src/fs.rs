//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading content from a local directory of
//! markdown files, one file per document.

use std::fs;
use std::path::PathBuf;

use crate::storage::{Entry, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Markdown file extension used for id derivation and lookup.
const MD_EXT: &str = "md";

/// Filesystem storage implementation.
///
/// Scans a flat content directory for markdown files and derives each
/// document's id from the file stem. Subdirectories are not descended into
/// for documents; they are surfaced by [`Storage::scan_dirs`] instead, so the
/// same type serves both the content directory and the page directory.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use quill_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("content/posts"));
/// let entries = storage.scan()?;
/// ```
pub struct FsStorage {
    /// Root directory for this storage.
    root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at the given directory.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Validate that an id cannot escape the root directory.
    ///
    /// Ids are single path components; separators and parent references
    /// (`..`) are rejected to prevent traversal (e.g. `../../etc/passwd`).
    fn validate_id(id: &str) -> Result<(), StorageError> {
        if id.is_empty() || id == ".." || id.contains('/') || id.contains('\\') {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(id)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Full path for a document id.
    fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{MD_EXT}"))
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<Entry>, StorageError> {
        let dir = fs::read_dir(&self.root)
            .map_err(|e| StorageError::io(e, Some(self.root.clone())).with_backend(BACKEND))?;

        let mut entries = Vec::new();
        for item in dir {
            let item =
                item.map_err(|e| StorageError::io(e, Some(self.root.clone())).with_backend(BACKEND))?;

            if item.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }

            let Some(file_name) = item.file_name().to_str().map(str::to_owned) else {
                continue;
            };

            // Skip hidden and underscore-prefixed files
            if file_name.starts_with('.') || file_name.starts_with('_') {
                continue;
            }

            let path = item.path();
            if path.extension().is_none_or(|e| e != MD_EXT) {
                continue;
            }

            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            entries.push(Entry {
                id: id.to_owned(),
                file_name,
            });
        }

        tracing::debug!(count = entries.len(), root = %self.root.display(), "Content scan completed");

        Ok(entries)
    }

    fn read(&self, id: &str) -> Result<String, StorageError> {
        Self::validate_id(id)?;
        let full_path = self.document_path(id);
        fs::read_to_string(&full_path)
            .map_err(|e| StorageError::io(e, Some(full_path.clone())).with_backend(BACKEND))
    }

    fn exists(&self, id: &str) -> bool {
        Self::validate_id(id).is_ok() && self.document_path(id).exists()
    }

    fn scan_dirs(&self) -> Result<Vec<String>, StorageError> {
        let dir = fs::read_dir(&self.root)
            .map_err(|e| StorageError::io(e, Some(self.root.clone())).with_backend(BACKEND))?;

        let mut names = Vec::new();
        for item in dir {
            let item =
                item.map_err(|e| StorageError::io(e, Some(self.root.clone())).with_backend(BACKEND))?;

            if !item.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }

            let Some(name) = item.file_name().to_str().map(str::to_owned) else {
                continue;
            };

            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            names.push(name);
        }

        Ok(names)
    }
}
