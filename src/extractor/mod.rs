//! Tag-stream text extraction.
//!
//! # Module Structure
//!
//! - `tags`: content tag catalog and lookup helpers
//! - `sink`: `TextExtractor`, the tokenizer sink that buffers fragment text

pub mod sink;
pub mod tags;

pub use sink::TextExtractor;
pub use tags::{is_content_tag, CONTENT_TAGS, CONTENT_TAG_SET};
