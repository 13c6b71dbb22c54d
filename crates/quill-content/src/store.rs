//! Post store: collection assembly over a storage backend.
//!
//! [`PostStore`] combines [`Storage`] scanning with front-matter parsing and
//! markdown rendering. Every call re-reads the content directory; there is
//! no shared mutable state between invocations.

use std::sync::Arc;

use serde::Serialize;

use quill_renderer::MarkdownRenderer;
use quill_storage::{Storage, StorageError};

use crate::front_matter::{FrontMatter, FrontMatterError, parse_document};

/// Default route prefix under which post detail pages live.
const DEFAULT_ROUTE_PREFIX: &str = "/posts";

/// A post summary: id plus front-matter, no body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostSummary {
    /// Document id (file stem, doubles as the URL slug).
    pub id: String,
    /// Parsed front-matter.
    #[serde(flatten)]
    pub meta: FrontMatter,
}

/// A fully loaded post with rendered body.
#[derive(Clone, Debug, Serialize)]
pub struct Post {
    /// Document id.
    pub id: String,
    /// Parsed front-matter.
    #[serde(flatten)]
    pub meta: FrontMatter,
    /// Body rendered to HTML by the markdown engine.
    pub html: String,
}

/// A post's static path: id paired with its navigable href.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostPath {
    /// Document id.
    pub id: String,
    /// Root-relative detail page path (e.g. `/posts/first-post`).
    pub href: String,
}

/// Content pipeline error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Storage failure (directory unreadable, document missing).
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// Malformed front-matter block in a document.
    #[error("invalid front-matter in '{id}': {source}")]
    FrontMatter {
        /// Id of the offending document.
        id: String,
        #[source]
        source: FrontMatterError,
    },
}

impl ContentError {
    /// True if the error is a missing-document error rather than a broader
    /// I/O failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Storage(e) if e.kind() == quill_storage::StorageErrorKind::NotFound
        )
    }
}

/// Loads and assembles post collections from a storage backend.
///
/// Operations come in two groups, matching the two consumers:
/// listing-oriented ([`load_all`](Self::load_all),
/// [`sorted_listing`](Self::sorted_listing)) and path-generation-oriented
/// ([`all_ids`](Self::all_ids), [`publishable_ids`](Self::publishable_ids),
/// [`load`](Self::load)).
///
/// Drafts are excluded from listings and publishable paths but remain
/// loadable by id and present in [`all_ids`](Self::all_ids); detail pages
/// for drafts stay reachable via direct link by design.
pub struct PostStore {
    storage: Arc<dyn Storage>,
    renderer: MarkdownRenderer,
    route_prefix: String,
}

impl PostStore {
    /// Create a new post store over the given storage.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            renderer: MarkdownRenderer::new(),
            route_prefix: DEFAULT_ROUTE_PREFIX.to_owned(),
        }
    }

    /// Replace the markdown renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: MarkdownRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Set the route prefix used for [`PostPath`] hrefs.
    #[must_use]
    pub fn with_route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.route_prefix = prefix.into();
        self
    }

    /// Load every post's summary, drafts included, in directory-listing
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Storage`] if the content directory cannot be
    /// listed or a file cannot be read, [`ContentError::FrontMatter`] if a
    /// metadata block is malformed. Either aborts the whole operation; no
    /// partial result is produced.
    pub fn load_all(&self) -> Result<Vec<PostSummary>, ContentError> {
        let entries = self.storage.scan()?;

        let mut posts = Vec::with_capacity(entries.len());
        for entry in entries {
            let content = self.storage.read(&entry.id)?;
            let (meta, _body) = parse_document(&content).map_err(|e| {
                ContentError::FrontMatter {
                    id: entry.id.clone(),
                    source: e,
                }
            })?;
            posts.push(PostSummary { id: entry.id, meta });
        }

        tracing::debug!(count = posts.len(), "Loaded post summaries");

        Ok(posts)
    }

    /// Load a single post by id, with its body rendered to HTML.
    ///
    /// Draft status is not checked here; a direct fetch succeeds for drafts.
    ///
    /// # Errors
    ///
    /// Returns a NotFound-class [`ContentError::Storage`] if no document
    /// matches the id, [`ContentError::FrontMatter`] on a malformed
    /// metadata block.
    pub fn load(&self, id: &str) -> Result<Post, ContentError> {
        let content = self.storage.read(id)?;
        let (meta, body) = parse_document(&content).map_err(|e| ContentError::FrontMatter {
            id: id.to_owned(),
            source: e,
        })?;
        let html = self.renderer.render(body);

        Ok(Post {
            id: id.to_owned(),
            meta,
            html,
        })
    }

    /// Every post's static path, drafts included.
    ///
    /// Used to pre-register every detail page. Draft inclusion is
    /// intentional: drafts stay reachable via direct link while being
    /// excluded from listings.
    ///
    /// # Errors
    ///
    /// Propagates [`load_all`](Self::load_all) errors unchanged.
    pub fn all_ids(&self) -> Result<Vec<PostPath>, ContentError> {
        Ok(self
            .load_all()?
            .into_iter()
            .map(|post| self.post_path(&post.id))
            .collect())
    }

    /// Static paths for publishable posts only.
    ///
    /// Decides which detail pages are actually generated at build time.
    ///
    /// # Errors
    ///
    /// Propagates [`load_all`](Self::load_all) errors unchanged.
    pub fn publishable_ids(&self) -> Result<Vec<PostPath>, ContentError> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|post| post.meta.is_publishable())
            .map(|post| self.post_path(&post.id))
            .collect())
    }

    /// Publishable summaries sorted by date, newest first.
    ///
    /// Dates are compared as opaque strings (lexicographic order over the
    /// canonical ISO-like form). The sort is stable, so equal dates keep
    /// their directory-listing order; posts without a date land at the end.
    ///
    /// # Errors
    ///
    /// Propagates [`load_all`](Self::load_all) errors unchanged.
    pub fn sorted_listing(&self) -> Result<Vec<PostSummary>, ContentError> {
        let mut posts: Vec<_> = self
            .load_all()?
            .into_iter()
            .filter(|post| post.meta.is_publishable())
            .collect();

        posts.sort_by(|a, b| b.meta.date.cmp(&a.meta.date));

        Ok(posts)
    }

    fn post_path(&self, id: &str) -> PostPath {
        PostPath {
            id: id.to_owned(),
            href: format!("{}/{id}", self.route_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    // Ensure PostStore can be shared across page generations
    static_assertions::assert_impl_all!(super::PostStore: Send, Sync);
    use pretty_assertions::assert_eq;
    use quill_storage::MockStorage;

    use super::*;

    /// The three-post fixture: two publishable posts out of date order plus
    /// one draft with the newest date.
    fn scenario_storage() -> Arc<dyn Storage> {
        Arc::new(
            MockStorage::new()
                .with_file("b", "---\ndate: \"2024-01-01\"\n---\nb body")
                .with_file("a", "---\ndate: \"2024-01-02\"\n---\na body")
                .with_file("c", "---\ndate: \"2024-01-03\"\ndraft: true\n---\nc body"),
        )
    }

    #[test]
    fn test_load_all_includes_drafts_in_listing_order() {
        let store = PostStore::new(scenario_storage());

        let posts = store.load_all().unwrap();

        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sorted_listing_descending_date_excludes_drafts() {
        let store = PostStore::new(scenario_storage());

        let listing = store.sorted_listing().unwrap();

        let ids: Vec<_> = listing.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_sorted_listing_adjacent_dates_non_increasing() {
        let store = PostStore::new(scenario_storage());

        let listing = store.sorted_listing().unwrap();

        for pair in listing.windows(2) {
            assert!(pair[0].meta.date >= pair[1].meta.date);
        }
    }

    #[test]
    fn test_sorted_listing_equal_dates_keep_input_order() {
        let storage = Arc::new(
            MockStorage::new()
                .with_file("first", "---\ndate: \"2024-06-01\"\n---\n")
                .with_file("second", "---\ndate: \"2024-06-01\"\n---\n"),
        );
        let store = PostStore::new(storage);

        let listing = store.sorted_listing().unwrap();

        let ids: Vec<_> = listing.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_sorted_listing_undated_posts_sort_last() {
        let storage = Arc::new(
            MockStorage::new()
                .with_file("undated", "no front matter")
                .with_file("dated", "---\ndate: \"2024-01-01\"\n---\n"),
        );
        let store = PostStore::new(storage);

        let listing = store.sorted_listing().unwrap();

        let ids: Vec<_> = listing.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["dated", "undated"]);
    }

    #[test]
    fn test_all_ids_includes_drafts() {
        let store = PostStore::new(scenario_storage());

        let paths = store.all_ids().unwrap();

        let ids: Vec<_> = paths.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&"a"));
        assert!(ids.contains(&"b"));
        assert!(ids.contains(&"c"));
    }

    #[test]
    fn test_publishable_ids_excludes_drafts() {
        let store = PostStore::new(scenario_storage());

        let paths = store.publishable_ids().unwrap();

        let ids: Vec<_> = paths.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_post_path_href_uses_route_prefix() {
        let store = PostStore::new(scenario_storage());

        let paths = store.publishable_ids().unwrap();

        assert_eq!(paths[0].href, "/posts/b");
    }

    #[test]
    fn test_custom_route_prefix() {
        let store = PostStore::new(scenario_storage()).with_route_prefix("/writing");

        let paths = store.all_ids().unwrap();

        assert!(paths.iter().all(|p| p.href.starts_with("/writing/")));
    }

    #[test]
    fn test_load_round_trip_renders_body() {
        let storage = Arc::new(MockStorage::new().with_file(
            "post",
            "---\ntitle: \"T\"\ndate: \"2024-01-01\"\n---\nhello",
        ));
        let store = PostStore::new(storage);

        let post = store.load("post").unwrap();

        assert_eq!(post.meta.title, Some("T".to_owned()));
        assert!(post.html.contains("hello"));
        assert!(post.html.contains("<p>"));
    }

    #[test]
    fn test_load_draft_succeeds_by_direct_fetch() {
        let store = PostStore::new(scenario_storage());

        let post = store.load("c").unwrap();

        assert!(post.meta.draft);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let store = PostStore::new(scenario_storage());

        let err = store.load("missing").unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_all_propagates_scan_failure() {
        let storage = Arc::new(MockStorage::new().with_scan_failure());
        let store = PostStore::new(storage);

        let result = store.load_all();

        assert!(result.is_err());
        assert!(!result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_all_malformed_front_matter_is_error() {
        let storage =
            Arc::new(MockStorage::new().with_file("broken", "---\ntitle: [oops\n---\nbody"));
        let store = PostStore::new(storage);

        let err = store.load_all().unwrap_err();

        assert!(matches!(err, ContentError::FrontMatter { ref id, .. } if id == "broken"));
    }
}
