//! Post loading and collection assembly for quill.
//!
//! This crate is the core of the content pipeline. It combines the storage
//! layer (a directory of markdown files, one per post) with front-matter
//! parsing and the markdown renderer, and produces the collections the
//! page-rendering layer consumes:
//!
//! - [`PostStore::load_all`] — every post's summary in directory-listing order
//! - [`PostStore::load`] — a single post with its body rendered to HTML
//! - [`PostStore::all_ids`] — every post's static path, drafts included
//! - [`PostStore::publishable_ids`] — static paths for non-draft posts only
//! - [`PostStore::sorted_listing`] — publishable summaries, newest first
//!
//! All operations are pure functions of the on-disk content at the moment of
//! invocation; nothing is cached or mutated between calls.

mod front_matter;
mod store;

pub use front_matter::{FrontMatter, FrontMatterError, parse_document, split_front_matter};
pub use store::{ContentError, Post, PostPath, PostStore, PostSummary};
