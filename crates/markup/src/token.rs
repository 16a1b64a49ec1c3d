//! Token model for the markup scanner.

use crate::span::Span;
use crate::text::SourceText;

/// Attribute with optional value.
///
/// Determinism contract: attributes are stored in source encounter order; the
/// scanner does not sort, dedupe, or hash them.
#[derive(Clone, Copy, Debug)]
pub struct Attribute<'a> {
    pub name: SourceText<'a>,
    /// `None` when the attribute had no `=value` part.
    pub value: Option<SourceText<'a>>,
}

impl<'a> Attribute<'a> {
    pub fn name_is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Opening tag.
#[derive(Clone, Debug)]
pub struct BeginTag<'a> {
    /// Raw source slice of the whole tag.
    pub raw: SourceText<'a>,
    pub name: SourceText<'a>,
    pub attrs: Vec<Attribute<'a>>,
    /// Tag was written with an explicit `/>`.
    pub self_closing: bool,
    /// Content inside the tag that did not parse as attributes, preserved
    /// verbatim rather than discarded.
    pub residue: Option<SourceText<'a>>,
}

impl<'a> BeginTag<'a> {
    pub fn name_is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// First attribute with the given ASCII-case-insensitive name.
    pub fn attr(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attrs.iter().find(|a| a.name_is(name))
    }
}

/// Closing tag.
#[derive(Clone, Debug)]
pub struct EndTag<'a> {
    /// Raw source slice; empty for synthetic end tags.
    pub raw: SourceText<'a>,
    pub name: SourceText<'a>,
    /// Generated for a self-closed begin tag rather than present in source.
    /// Synthetic end tags are zero-length and sit right after the begin tag.
    pub synthetic: bool,
}

impl<'a> EndTag<'a> {
    pub fn name_is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[derive(Clone, Debug)]
pub enum Token<'a> {
    /// Run of character data between markup. A `<` that starts no recognized
    /// construct is part of the run.
    Text(SourceText<'a>),
    BeginTag(BeginTag<'a>),
    EndTag(EndTag<'a>),
    /// `<!-- ... -->` span, delimiters included.
    Comment(SourceText<'a>),
    /// Any `<! ... >` construct that is not a comment (doctype and friends).
    Directive(SourceText<'a>),
}

impl<'a> Token<'a> {
    /// Byte span of this token in the source document.
    pub fn span(&self) -> Span {
        match self {
            Token::Text(t) | Token::Comment(t) | Token::Directive(t) => t.span(),
            Token::BeginTag(tag) => tag.raw.span(),
            Token::EndTag(tag) => tag.raw.span(),
        }
    }

    /// Raw source slice of this token. Empty for synthetic end tags.
    pub fn raw(&self) -> &'a str {
        match self {
            Token::Text(t) | Token::Comment(t) | Token::Directive(t) => t.as_str(),
            Token::BeginTag(tag) => tag.raw.as_str(),
            Token::EndTag(tag) => tag.raw.as_str(),
        }
    }
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// HTML void elements: tags that never take a separate close tag.
///
/// The scanner keys nothing off this table (`self_closing` reflects an
/// explicit `/>` only); it is for consumers deciding close-tag symmetry.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| name.eq_ignore_ascii_case(v))
}
