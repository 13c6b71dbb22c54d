//! YAML front-matter parsing.
//!
//! Content files begin with an optional metadata block fenced by `---`
//! lines, followed by the markdown body:
//!
//! ```text
//! ---
//! title: "First post"
//! date: "2024-01-01"
//! ---
//! Body text.
//! ```
//!
//! Known fields are typed on [`FrontMatter`]; everything else is passed
//! through verbatim in `extra`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Post metadata parsed from the front-matter block.
///
/// All fields are optional; a file without a front-matter block gets the
/// default instance. `date` is an opaque sortable string (ISO-like, e.g.
/// `2024-01-01`) compared lexicographically, never parsed as a calendar
/// date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Post title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short description for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication date as a sortable string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Draft flag. Absent means publishable.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,

    /// Additional fields passed through verbatim.
    #[serde(flatten, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from YAML content.
    ///
    /// Empty content returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, FrontMatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed)
            .map_err(|e| FrontMatterError::Parse(format!("Invalid YAML: {e}")))
    }

    /// Whether the post may appear in listings and static path generation.
    #[must_use]
    pub fn is_publishable(&self) -> bool {
        !self.draft
    }
}

/// Error type for front-matter operations.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

/// Split a content file into its front-matter block and body.
///
/// Returns `(Some(yaml), body)` when the file opens with a fenced block,
/// `(None, content)` otherwise. An opening fence without a closing fence is
/// treated as plain body text.
#[must_use]
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (None, content);
    };

    for (idx, _) in rest.match_indices("---") {
        // The closing fence must sit at the start of a line.
        if idx > 0 && rest.as_bytes()[idx - 1] != b'\n' {
            continue;
        }

        let block = &rest[..idx];
        let after = &rest[idx + 3..];
        if after.is_empty() {
            return (Some(block), "");
        }
        if let Some(body) = after.strip_prefix('\n').or_else(|| after.strip_prefix("\r\n")) {
            return (Some(block), body);
        }
    }

    (None, content)
}

/// Parse a content file into front-matter and body.
///
/// # Errors
///
/// Returns an error if the front-matter block is malformed YAML.
pub fn parse_document(content: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let (block, body) = split_front_matter(content);
    let meta = match block {
        Some(yaml) => FrontMatter::from_yaml(yaml)?,
        None => FrontMatter::default(),
    };
    Ok((meta, body))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── split_front_matter tests ─────────────────────────────────────

    #[test]
    fn test_split_with_block() {
        let content = "---\ntitle: Test\n---\nBody text.";

        let (block, body) = split_front_matter(content);

        assert_eq!(block, Some("title: Test\n"));
        assert_eq!(body, "Body text.");
    }

    #[test]
    fn test_split_without_block() {
        let content = "Just a body.";

        let (block, body) = split_front_matter(content);

        assert_eq!(block, None);
        assert_eq!(body, "Just a body.");
    }

    #[test]
    fn test_split_unclosed_fence_is_body() {
        let content = "---\ntitle: Test\nno closing fence";

        let (block, body) = split_front_matter(content);

        assert_eq!(block, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_split_empty_body() {
        let content = "---\ntitle: Test\n---";

        let (block, body) = split_front_matter(content);

        assert_eq!(block, Some("title: Test\n"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_dashes_in_body_not_a_fence() {
        let content = "---\ntitle: Test\n---\nBody with --- dashes inline";

        let (block, body) = split_front_matter(content);

        assert_eq!(block, Some("title: Test\n"));
        assert_eq!(body, "Body with --- dashes inline");
    }

    #[test]
    fn test_split_horizontal_rule_without_front_matter() {
        // A thematic break later in the file must not be mistaken for a fence
        let content = "intro\n\n---\n\noutro";

        let (block, body) = split_front_matter(content);

        assert_eq!(block, None);
        assert_eq!(body, content);
    }

    // ── FrontMatter parsing tests ────────────────────────────────────

    #[test]
    fn test_parse_empty_yaml() {
        let meta = FrontMatter::from_yaml("").unwrap();

        assert_eq!(meta, FrontMatter::default());
        assert!(meta.is_publishable());
    }

    #[test]
    fn test_parse_all_known_fields() {
        let yaml = "title: \"First\"\ndescription: About things\ndate: \"2024-01-01\"\ndraft: true";

        let meta = FrontMatter::from_yaml(yaml).unwrap();

        assert_eq!(meta.title, Some("First".to_owned()));
        assert_eq!(meta.description, Some("About things".to_owned()));
        assert_eq!(meta.date, Some("2024-01-01".to_owned()));
        assert!(meta.draft);
        assert!(!meta.is_publishable());
    }

    #[test]
    fn test_parse_draft_absent_means_publishable() {
        let meta = FrontMatter::from_yaml("title: Post").unwrap();

        assert!(!meta.draft);
        assert!(meta.is_publishable());
    }

    #[test]
    fn test_parse_draft_false_means_publishable() {
        let meta = FrontMatter::from_yaml("draft: false").unwrap();

        assert!(meta.is_publishable());
    }

    #[test]
    fn test_parse_extra_fields_passed_through() {
        let yaml = "title: Post\nhero_image: /img/hero.png\ntags:\n  - rust\n  - blog";

        let meta = FrontMatter::from_yaml(yaml).unwrap();

        assert_eq!(
            meta.extra.get("hero_image"),
            Some(&serde_yaml::Value::from("/img/hero.png"))
        );
        assert!(meta.extra.contains_key("tags"));
    }

    #[test]
    fn test_parse_unquoted_date_number_like() {
        // Unquoted ISO dates parse as YAML strings
        let meta = FrontMatter::from_yaml("date: 2024-01-01").unwrap();

        assert_eq!(meta.date, Some("2024-01-01".to_owned()));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = FrontMatter::from_yaml("title: [unclosed");

        assert!(result.is_err());
    }

    // ── parse_document tests ─────────────────────────────────────────

    #[test]
    fn test_parse_document_round_trip() {
        let content = "---\ntitle: \"T\"\ndate: \"2024-01-01\"\n---\nhello";

        let (meta, body) = parse_document(content).unwrap();

        assert_eq!(meta.title, Some("T".to_owned()));
        assert_eq!(meta.date, Some("2024-01-01".to_owned()));
        assert_eq!(body, "hello");
    }

    #[test]
    fn test_parse_document_no_front_matter() {
        let (meta, body) = parse_document("plain body").unwrap();

        assert_eq!(meta, FrontMatter::default());
        assert_eq!(body, "plain body");
    }

    #[test]
    fn test_parse_document_malformed_block_is_error() {
        let result = parse_document("---\ntitle: [broken\n---\nbody");

        assert!(result.is_err());
    }
}
