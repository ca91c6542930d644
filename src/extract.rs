//! Top-level extraction entry points.
//!
//! `extract` drives one [`TextExtractor`] over an in-memory document;
//! `extract_file` adds the read-and-decode step in front of it.

use std::fs;
use std::path::Path;

use html5ever::tokenizer::{BufferQueue, Tokenizer, TokenizerOpts};
use log::debug;
use tendril::StrTendril;

use crate::error::{Error, Result};
use crate::extractor::TextExtractor;

/// Extract the text lines of an in-memory HTML document.
///
/// Returns one line per content-bearing tag, in document order of the
/// opening tags. Each line is trimmed; tags whose accumulated text is empty
/// after trimming are omitted.
#[must_use]
pub fn extract(html: &str) -> Vec<String> {
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from(html));

    let mut tokenizer = Tokenizer::new(TextExtractor::new(), TokenizerOpts::default());
    // The sink never suspends, so a single feed drains the whole queue.
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    let fragments = tokenizer.sink.into_fragments();
    debug!("collected {} fragments from {} bytes of markup", fragments.len(), html.len());

    fragments
        .into_iter()
        .map(|fragment| fragment.trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Read `path` fully, decode it as UTF-8, and extract its text lines.
///
/// The file handle is released as soon as the read completes; tokenization
/// runs on the in-memory string.
pub fn extract_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let html = String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", html.len(), path.display());

    Ok(extract(&html))
}
