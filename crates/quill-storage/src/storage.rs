//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for abstracting document scanning and
//! retrieval, along with [`StorageError`] for unified error handling across
//! backends.
//!
//! # Identifier Convention
//!
//! Documents are addressed by **id**, the file name with the `.md` extension
//! stripped (e.g. `first-post.md` has id `first-post`). The id is the
//! canonical lookup key and doubles as the public URL slug. Uniqueness is
//! assumed from the one-file-per-document layout and is not policed here.

use std::path::PathBuf;

/// A content directory entry returned by [`Storage::scan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Document id (file name with extension stripped).
    pub id: String,
    /// Original file name (e.g. `first-post.md`).
    pub file_name: String,
}

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Document does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid identifier (e.g. path traversal attempt).
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
///
/// Two classes matter to the build: [`StorageErrorKind::NotFound`] fails the
/// page that asked for the document, everything else is a fatal directory
/// failure. There is no retry handling; a build either completes or aborts.
#[derive(Debug)]
pub struct StorageError {
    kind: StorageErrorKind,
    path: Option<PathBuf>,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }

    /// Backend identifier, if attached.
    #[must_use]
    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }

    /// Path context, if attached.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for content scanning and retrieval.
///
/// Provides a unified interface for accessing documents regardless of
/// backend. Implementations handle backend-specific details like id
/// derivation and file filtering.
pub trait Storage: Send + Sync {
    /// Scan the content directory and return all document entries.
    ///
    /// Entries come back in directory-listing order; no ordering is
    /// guaranteed by the underlying backend. Hidden and underscore-prefixed
    /// files are skipped, as are files without a markdown extension.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory cannot be listed. This is a
    /// fatal condition for the build; no partial result is produced.
    fn scan(&self) -> Result<Vec<Entry>, StorageError>;

    /// Read the raw text of the document with the given id.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageErrorKind::NotFound`] error if no document matches
    /// the id, or another [`StorageError`] if it cannot be read.
    fn read(&self, id: &str) -> Result<String, StorageError>;

    /// Check if a document exists for the given id.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, id: &str) -> bool;

    /// List the first-level subdirectory names of the storage root.
    ///
    /// Used for deriving navigation sections from a page-directory layout.
    /// Files at the root level are not included.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory cannot be listed.
    fn scan_dirs(&self) -> Result<Vec<String>, StorageError>;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_entry_id_and_file_name() {
        let entry = Entry {
            id: "first-post".to_owned(),
            file_name: "first-post.md".to_owned(),
        };

        assert_eq!(entry.id, "first-post");
        assert_eq!(entry.file_name, "first-post.md");
    }

    #[test]
    fn test_storage_error_kind_variants() {
        // Ensure all variants exist and can be compared
        assert_ne!(
            StorageErrorKind::NotFound,
            StorageErrorKind::PermissionDenied
        );
        assert_ne!(StorageErrorKind::InvalidPath, StorageErrorKind::Other);
    }

    #[test]
    fn test_storage_error_new() {
        let err = StorageError::new(StorageErrorKind::NotFound);

        assert_eq!(err.kind(), StorageErrorKind::NotFound);
        assert!(err.path().is_none());
        assert!(err.backend().is_none());
    }

    #[test]
    fn test_storage_error_with_path() {
        let err = StorageError::new(StorageErrorKind::NotFound).with_path("/foo/bar");

        assert_eq!(err.path(), Some(Path::new("/foo/bar")));
    }

    #[test]
    fn test_storage_error_with_backend() {
        let err = StorageError::new(StorageErrorKind::NotFound).with_backend("Fs");

        assert_eq!(err.backend(), Some("Fs"));
    }

    #[test]
    fn test_storage_error_not_found() {
        let err = StorageError::not_found("/foo/bar");

        assert_eq!(err.kind(), StorageErrorKind::NotFound);
        assert_eq!(err.path(), Some(Path::new("/foo/bar")));
    }

    #[test]
    fn test_storage_error_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StorageError::io(io_err, Some(PathBuf::from("/foo/bar")));

        assert_eq!(err.kind(), StorageErrorKind::NotFound);
        assert_eq!(err.path(), Some(Path::new("/foo/bar")));
    }

    #[test]
    fn test_storage_error_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = StorageError::io(io_err, None);

        assert_eq!(err.kind(), StorageErrorKind::PermissionDenied);
    }

    #[test]
    fn test_storage_error_display_simple() {
        let err = StorageError::new(StorageErrorKind::NotFound);

        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_storage_error_display_with_backend() {
        let err = StorageError::new(StorageErrorKind::NotFound).with_backend("Fs");

        assert_eq!(err.to_string(), "[Fs] Not found");
    }

    #[test]
    fn test_storage_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = StorageError::new(StorageErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("/foo/bar")
            .with_source(io_err);

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: file not found (path: /foo/bar)"
        );
    }

    #[test]
    fn test_storage_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorageError>();
    }
}
