//! Tokenizer sink that buffers text from content-bearing tags.
//!
//! `TextExtractor` consumes the token stream one event at a time. It keeps
//! a single `current_tag` slot rather than a stack of open elements: every
//! start-tag overwrites the slot and every end-tag clears it, whatever the
//! closing name. Character data lands in the newest fragment only while the
//! slot holds a content-bearing tag, so text that follows a nested end-tag
//! is discarded until the next start-tag opens.

use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{TagKind, Token, TokenSink, TokenSinkResult};
use html5ever::LocalName;
use log::trace;

use super::tags::is_content_tag;

/// Collects one text fragment per content-bearing start-tag.
///
/// Create one per document, feed it through the tokenizer, then read the
/// fragments out with [`TextExtractor::into_fragments`]. Fragments keep
/// their raw accumulated form (trailing separator spaces and empty
/// fragments included); callers decide about trimming and suppression.
#[derive(Debug, Default)]
pub struct TextExtractor {
    /// Most recently opened tag. Overwritten on every start-tag, cleared
    /// on every end-tag; never holds more than one name.
    current_tag: Option<LocalName>,
    fragments: Vec<String>,
}

impl TextExtractor {
    /// Create an extractor with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragments accumulated so far, in document order of their start-tags.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Consume the extractor and return its fragments.
    #[must_use]
    pub fn into_fragments(self) -> Vec<String> {
        self.fragments
    }

    fn append_text(&mut self, text: &str) {
        if !self.current_tag.as_deref().is_some_and(is_content_tag) {
            return;
        }
        // Guards against character data arriving before any start-tag.
        if let Some(fragment) = self.fragments.last_mut() {
            fragment.push_str(text.trim());
            fragment.push(' ');
        }
    }
}

impl TokenSink for TextExtractor {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => {
                    if is_content_tag(&tag.name) {
                        self.fragments.push(String::new());
                    }
                    // Script and style bodies are raw text; without a tree
                    // builder the sink has to request the state switch so
                    // their contents arrive as character data instead of
                    // being re-tokenized as markup.
                    let raw_kind = match &*tag.name {
                        "script" if !tag.self_closing => Some(RawKind::ScriptData),
                        "style" if !tag.self_closing => Some(RawKind::Rawtext),
                        _ => None,
                    };
                    // A self-closing token (`<x/>`) opens and closes in one event.
                    self.current_tag = if tag.self_closing { None } else { Some(tag.name) };
                    if let Some(kind) = raw_kind {
                        return TokenSinkResult::RawData(kind);
                    }
                }
                TagKind::EndTag => self.current_tag = None,
            },
            Token::CharacterTokens(text) => self.append_text(&text),
            Token::ParseError(err) => trace!("tokenizer recovered: {err}"),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html5ever::tokenizer::Tag;
    use tendril::StrTendril;

    fn feed(sink: &mut TextExtractor, token: Token) {
        let _ = sink.process_token(token, 0);
    }

    fn start(name: &str) -> Token {
        Token::TagToken(Tag {
            kind: TagKind::StartTag,
            name: LocalName::from(name),
            self_closing: false,
            attrs: Vec::new(),
        })
    }

    fn start_self_closing(name: &str) -> Token {
        Token::TagToken(Tag {
            kind: TagKind::StartTag,
            name: LocalName::from(name),
            self_closing: true,
            attrs: Vec::new(),
        })
    }

    fn end(name: &str) -> Token {
        Token::TagToken(Tag {
            kind: TagKind::EndTag,
            name: LocalName::from(name),
            self_closing: false,
            attrs: Vec::new(),
        })
    }

    fn text(data: &str) -> Token {
        Token::CharacterTokens(StrTendril::from(data))
    }

    #[test]
    fn test_content_start_tag_opens_empty_fragment() {
        let mut sink = TextExtractor::new();
        feed(&mut sink, start("p"));
        assert_eq!(sink.fragments(), [String::new()]);
    }

    #[test]
    fn test_non_content_start_tag_opens_no_fragment() {
        let mut sink = TextExtractor::new();
        feed(&mut sink, start("div"));
        feed(&mut sink, text("noise"));
        assert!(sink.fragments().is_empty());
    }

    #[test]
    fn test_text_accumulates_trimmed_with_trailing_separator() {
        let mut sink = TextExtractor::new();
        feed(&mut sink, start("p"));
        feed(&mut sink, text("  Hello "));
        feed(&mut sink, text("world"));
        assert_eq!(sink.fragments(), ["Hello world ".to_owned()]);
    }

    #[test]
    fn test_end_tag_clears_slot_even_on_mismatched_name() {
        let mut sink = TextExtractor::new();
        feed(&mut sink, start("p"));
        feed(&mut sink, text("kept"));
        feed(&mut sink, end("span"));
        feed(&mut sink, text("lost"));
        assert_eq!(sink.fragments(), ["kept ".to_owned()]);
    }

    #[test]
    fn test_nested_start_tag_steals_the_slot() {
        let mut sink = TextExtractor::new();
        feed(&mut sink, start("li"));
        feed(&mut sink, text("item"));
        feed(&mut sink, start("b"));
        feed(&mut sink, text("bold"));
        assert_eq!(sink.fragments(), ["item ".to_owned()]);
    }

    #[test]
    fn test_nested_content_tag_gets_its_own_fragment() {
        let mut sink = TextExtractor::new();
        feed(&mut sink, start("li"));
        feed(&mut sink, text("item"));
        feed(&mut sink, start("code"));
        feed(&mut sink, text("x"));
        assert_eq!(sink.fragments(), ["item ".to_owned(), "x ".to_owned()]);
    }

    #[test]
    fn test_self_closing_content_tag_leaves_slot_empty() {
        let mut sink = TextExtractor::new();
        feed(&mut sink, start_self_closing("p"));
        feed(&mut sink, text("after"));
        assert_eq!(sink.fragments(), [String::new()]);
    }

    #[test]
    fn test_text_before_any_tag_is_ignored() {
        let mut sink = TextExtractor::new();
        feed(&mut sink, text("preamble"));
        assert!(sink.fragments().is_empty());
    }
}
