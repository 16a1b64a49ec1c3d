//! Borrowed text views over the source document.

use std::fmt;

use crate::span::Span;

/// Deferred substring of the source document.
///
/// Invariant: the span lies on UTF-8 boundaries inside `source`, so
/// `as_str()` always equals `&source[span.start..span.end]`. Materializing is
/// a bounds-checked slice; no copy is made until a caller asks for an owned
/// `String`.
#[derive(Clone, Copy)]
pub struct SourceText<'a> {
    source: &'a str,
    span: Span,
}

impl<'a> SourceText<'a> {
    pub fn new(source: &'a str, span: Span) -> Self {
        debug_assert!(span.end <= source.len(), "span must lie inside the source");
        debug_assert!(
            source.is_char_boundary(span.start) && source.is_char_boundary(span.end),
            "span must be on UTF-8 boundaries"
        );
        Self { source, span }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn offset(&self) -> usize {
        self.span.start
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Materialize the text. The slice borrows the source; nothing is copied.
    pub fn as_str(&self) -> &'a str {
        &self.source[self.span.start..self.span.end]
    }

    /// ASCII-case-insensitive comparison against `other`.
    pub fn eq_ignore_ascii_case(&self, other: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(other)
    }
}

impl fmt::Debug for SourceText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.as_str(), self.span.start, self.span.end)
    }
}

impl fmt::Display for SourceText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
