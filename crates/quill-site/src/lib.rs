//! Navigation sections for quill.
//!
//! A **section** is a top-level navigable area of the site, rendered as a
//! menu entry. Sections are either declared explicitly in configuration or
//! derived from the first-level subdirectories of the site's page
//! directory. Both forms go through [`SectionSource`], so nothing reads
//! ambient build state and the derivation is unit-testable against a
//! synthetic directory listing.
//!
//! Menu highlighting is a pure function of the section list and the current
//! page path via [`active_section`]; there is no request context.

use serde::{Deserialize, Serialize};

use quill_storage::{Storage, StorageError};

/// Page subdirectory that never becomes a section (API routes).
pub const RESERVED_DIR: &str = "api";

/// A navigable top-level area of the site.
///
/// Sections have no identity beyond their `href`; they are recomputed
/// every build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display label (e.g. `Posts`).
    pub name: String,
    /// Root-relative path (e.g. `/posts`).
    pub href: String,
}

impl Section {
    /// Create a section from a page-directory name.
    ///
    /// The directory name becomes the href (`/<dir>`) and, capitalized,
    /// the display label.
    #[must_use]
    pub fn from_dir_name(dir: &str) -> Self {
        Self {
            name: capitalize(dir),
            href: format!("/{dir}"),
        }
    }
}

/// Where the navigation section list comes from.
///
/// Earlier site iterations hard-coded the menu as a process-wide constant;
/// this makes the choice an explicit configuration value instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionSource {
    /// A fixed, declared list.
    Declared(Vec<Section>),
    /// Derive from the page directory's first-level subdirectories.
    Derived,
}

impl SectionSource {
    /// Resolve the section list, consulting storage only when derived.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the page directory cannot be listed.
    /// This is a build-time fatal condition, not recoverable.
    pub fn resolve(&self, pages: &dyn Storage) -> Result<Vec<Section>, StorageError> {
        match self {
            Self::Declared(sections) => Ok(sections.clone()),
            Self::Derived => sections_from_storage(pages),
        }
    }
}

/// Derive navigation sections from the page directory's first-level
/// subdirectories.
///
/// The reserved API-route directory is excluded even when present.
///
/// # Errors
///
/// Returns [`StorageError`] if the page directory cannot be listed.
pub fn sections_from_storage(pages: &dyn Storage) -> Result<Vec<Section>, StorageError> {
    Ok(sections_from_dirs(pages.scan_dirs()?))
}

/// Map page-directory names to sections, excluding the reserved directory.
#[must_use]
pub fn sections_from_dirs(dirs: impl IntoIterator<Item = String>) -> Vec<Section> {
    dirs.into_iter()
        .filter(|dir| dir != RESERVED_DIR)
        .map(|dir| Section::from_dir_name(&dir))
        .collect()
}

/// Upper-case the first letter of a string for display.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Find the section matching the current page path.
///
/// Matches the first path segment against each section's href, so
/// `/posts/first-post` highlights the `/posts` section and `/` highlights
/// only a root section. Pure function of its inputs.
#[must_use]
pub fn active_section<'a>(sections: &'a [Section], current_path: &str) -> Option<&'a Section> {
    let segment = current_path
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    let target = format!("/{segment}");

    sections.iter().find(|section| section.href == target)
}
