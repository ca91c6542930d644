//! Content tag catalog.
//!
//! The array keeps a stable declaration order; the `HashSet` companion
//! gives O(1) lookup on the tokenizer hot path.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tags whose contained text is collected: paragraphs, list items, the
/// first four heading levels, table cells, and inline code.
pub static CONTENT_TAGS: [&str; 9] = ["p", "li", "h1", "h2", "h3", "h4", "th", "td", "code"];

/// `CONTENT_TAGS` as a `HashSet`.
pub static CONTENT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CONTENT_TAGS.into_iter().collect());

/// Check whether a tag name is content-bearing.
#[must_use]
pub fn is_content_tag(name: &str) -> bool {
    CONTENT_TAG_SET.contains(name)
}
