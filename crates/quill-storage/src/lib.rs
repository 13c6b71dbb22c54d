//! Storage abstraction for the quill content pipeline.
//!
//! This crate provides a [`Storage`] trait for abstracting content-directory
//! scanning and document retrieval from the underlying backend. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Clean separation** between collection logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `scan()`, `read()`, `exists()`, and `scan_dirs()` methods
//! - [`FsStorage`] implementation for filesystem backends
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use quill_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("content/posts"));
//! for entry in storage.scan()? {
//!     println!("{}", entry.id);
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Entry, Storage, StorageError, StorageErrorKind};
