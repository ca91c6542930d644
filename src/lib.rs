//! # textlines
//!
//! Extracts human-readable text from HTML documents by walking the
//! tag-token stream and collecting the text found inside a fixed set of
//! content-bearing tags: paragraphs, list items, headings `h1`-`h4`,
//! table cells, and inline code.
//!
//! ## Quick Start
//!
//! ```rust
//! use textlines::extract;
//!
//! let html = "<h1>Title</h1><p>Body text.</p>";
//! let lines = extract(html);
//! assert_eq!(lines, ["Title", "Body text."]);
//! ```
//!
//! ## Extraction model
//!
//! The extractor tracks only the most recently opened tag, in a single
//! slot rather than a stack of open elements. Every start-tag overwrites
//! the slot and every end-tag clears it, regardless of nesting or of which
//! element the closing name matches. Two consequences worth knowing:
//!
//! - A content tag nested inside another content tag gets its own output
//!   line (`<li>item <code>x</code></li>` yields `item` and `x`).
//! - Text that follows a nested tag's close is dropped until the next
//!   start-tag, because the slot is cleared rather than restored
//!   (`<p>Para <code>x</code> end</p>` yields `Para` and `x`; ` end` is
//!   lost).
//!
//! Malformed markup is handled by the tokenizer's own recovery; extraction
//! itself never fails on bad input.

mod error;
mod extract;

/// Tag-stream extraction (content tag catalog and tokenizer sink).
pub mod extractor;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract, extract_file};
