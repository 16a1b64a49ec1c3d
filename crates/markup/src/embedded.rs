//! Embedded-language delegation for `<script>` and `<style>` bodies.

use crate::span::Span;
use crate::text::SourceText;
use crate::token::Token;

/// Which rawtext element a body belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawTextKind {
    Script,
    Style,
}

impl RawTextKind {
    /// Close-tag prefix used to find the literal end of the raw body.
    pub(crate) fn close_tag(self) -> &'static [u8] {
        match self {
            RawTextKind::Script => b"</script",
            RawTextKind::Style => b"</style",
        }
    }
}

/// Tokenizes the raw body of a `<script>` or `<style>` element.
///
/// The scanner never applies markup rules inside rawtext bodies; it hands the
/// body span to this collaborator and splices the returned tokens into the
/// stream in order. Implementations must only return tokens whose spans lie
/// inside `body`.
pub trait EmbeddedTokenizer {
    fn tokenize<'a>(&mut self, kind: RawTextKind, source: &'a str, body: Span) -> Vec<Token<'a>>;
}

/// Default body handler: the entire body becomes a single text token.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawTextTokenizer;

impl EmbeddedTokenizer for RawTextTokenizer {
    fn tokenize<'a>(&mut self, _kind: RawTextKind, source: &'a str, body: Span) -> Vec<Token<'a>> {
        if body.is_empty() {
            return Vec::new();
        }
        vec![Token::Text(SourceText::new(source, body))]
    }
}
