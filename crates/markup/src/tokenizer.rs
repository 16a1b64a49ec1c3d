//! Tolerant, forward-only HTML scanner with a constrained, practical tag-name
//! character set.
//!
//! Supported tag/attribute-name characters (ASCII only):
//! `[A-Za-z][A-Za-z0-9.:_-]*`.
//!
//! This is not an HTML5 tokenizer/state machine. Recognition is deliberately
//! shallow so malformed markup always degrades into defined output instead of
//! errors:
//! - A `<` that starts no recognized construct folds into the surrounding
//!   text run.
//! - Unparseable content inside a begin tag is preserved as residue.
//! - Unterminated comments fold into text; unterminated rawtext bodies run to
//!   end of input.
//!
//! Known limitations (intentional):
//! - No character-reference (entity) decoding; token text is the raw source
//!   slice.
//! - Rawtext close-tag scanning accepts only ASCII whitespace before `>` (see
//!   `find_rawtext_close`).

use std::collections::VecDeque;

use memchr::{memchr, memchr2};

use crate::embedded::{EmbeddedTokenizer, RawTextKind, RawTextTokenizer};
use crate::span::Span;
use crate::text::SourceText;
use crate::token::{Attribute, BeginTag, EndTag, Token};

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// Configuration for the scanner.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenizerConfig {
    /// Emit a zero-length synthetic end tag immediately after each
    /// self-closing begin tag.
    pub synthetic_end_tags: bool,
}

/// Single-pass scanner over a complete, immutable HTML string.
///
/// Tokens come out in non-decreasing offset order through [`next_token`] and
/// the `Iterator` implementation; [`peek`] buffers ahead without consuming.
/// One scan step may buffer several tokens (leading text plus the markup that
/// follows it, or a whole delegated rawtext body); buffered tokens drain
/// before the cursor advances further.
///
/// Not for concurrent use: one instance per document, instances share no
/// state.
///
/// [`next_token`]: Tokenizer::next_token
/// [`peek`]: Tokenizer::peek
pub struct Tokenizer<'a> {
    source: &'a str,
    cursor: usize,
    pending: VecDeque<Token<'a>>,
    config: TokenizerConfig,
    embedded: Box<dyn EmbeddedTokenizer + 'a>,
}

impl<'a> Tokenizer<'a> {
    /// Never fails; an empty string yields a scanner that is immediately
    /// exhausted.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, TokenizerConfig::default())
    }

    pub fn with_config(source: &'a str, config: TokenizerConfig) -> Self {
        Self {
            source,
            cursor: 0,
            pending: VecDeque::new(),
            config,
            embedded: Box::new(RawTextTokenizer),
        }
    }

    /// Replace the embedded-language tokenizer used for rawtext bodies.
    pub fn with_embedded(mut self, embedded: impl EmbeddedTokenizer + 'a) -> Self {
        self.embedded = Box::new(embedded);
        self
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Offset of the next token [`next_token`] would return, accounting for
    /// buffered lookahead.
    ///
    /// [`next_token`]: Tokenizer::next_token
    pub fn position(&self) -> usize {
        self.pending.front().map_or(self.cursor, |t| t.span().start)
    }

    /// Next token in document order, or `None` once the input is exhausted.
    /// Exhaustion is terminal: every later call also returns `None`.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.pending.is_empty() {
            self.scan_step();
        }
        self.pending.pop_front()
    }

    /// Token `lookahead` positions past the next [`next_token`] result,
    /// without consuming anything (`0` previews the very next token).
    /// Increasing lookahead is amortized single-pass.
    ///
    /// [`next_token`]: Tokenizer::next_token
    pub fn peek(&mut self, lookahead: usize) -> Option<&Token<'a>> {
        while self.pending.len() <= lookahead {
            if !self.scan_step() {
                return None;
            }
        }
        self.pending.get(lookahead)
    }

    /// Runs one scan step, buffering at least one token unless the cursor is
    /// already at end of input. Returns whether anything was buffered.
    //
    // Invariant: scanning is byte-wise, but slice endpoints are only ever cut
    // at ASCII structural bytes or after runs of ASCII name characters, so
    // endpoints stay on UTF-8 boundaries.
    fn scan_step(&mut self) -> bool {
        let bytes = self.source.as_bytes();
        let text_start = self.cursor;
        let mut i = self.cursor;
        while i < bytes.len() {
            match memchr(b'<', &bytes[i..]) {
                None => {
                    i = bytes.len();
                    break;
                }
                Some(rel) => {
                    i += rel;
                    if let Some((token, end)) = self.scan_markup(i) {
                        if i > text_start {
                            let text = self.slice(text_start, i);
                            self.pending.push_back(Token::Text(text));
                        }
                        self.cursor = end;
                        self.queue_markup(token);
                        return true;
                    }
                    // A '<' that starts no recognized construct is ordinary
                    // text; resume the text scan past it.
                    i += 1;
                }
            }
        }
        self.cursor = i;
        if i > text_start {
            let text = self.slice(text_start, i);
            self.pending.push_back(Token::Text(text));
            return true;
        }
        false
    }

    /// Buffers a recognized markup token plus whatever it entails: the
    /// synthetic close for a self-closing tag, or a delegated rawtext body.
    fn queue_markup(&mut self, token: Token<'a>) {
        let mut synthetic = None;
        let mut rawtext = None;
        if let Token::BeginTag(tag) = &token {
            if tag.self_closing {
                if self.config.synthetic_end_tags {
                    let end = tag.raw.span().end;
                    synthetic = Some(EndTag {
                        raw: self.slice(end, end),
                        name: tag.name,
                        synthetic: true,
                    });
                }
            } else if tag.name_is("script") {
                rawtext = Some(RawTextKind::Script);
            } else if tag.name_is("style") {
                rawtext = Some(RawTextKind::Style);
            }
        }
        self.pending.push_back(token);
        if let Some(tag) = synthetic {
            self.pending.push_back(Token::EndTag(tag));
        }
        if let Some(kind) = rawtext {
            self.scan_rawtext(kind);
        }
    }

    /// Attempts to recognize a markup construct at `at` (a `<` position).
    /// Recognition order is comment, directive, end tag, begin tag; the first
    /// match wins. Returns the token and the offset one past its end.
    fn scan_markup(&self, at: usize) -> Option<(Token<'a>, usize)> {
        let bytes = self.source.as_bytes();
        debug_assert_eq!(bytes[at], b'<');
        match *bytes.get(at + 1)? {
            b'!' => {
                if self.source[at..].starts_with(COMMENT_START) {
                    // An unterminated comment fails recognition here, and the
                    // directive path below must not claim it either.
                    let rel = self.source[at + COMMENT_START.len()..].find(COMMENT_END)?;
                    let end = at + COMMENT_START.len() + rel + COMMENT_END.len();
                    return Some((Token::Comment(self.slice(at, end)), end));
                }
                let rel = self.source[at + 2..].find('>')?;
                let end = at + 2 + rel + 1;
                Some((Token::Directive(self.slice(at, end)), end))
            }
            b'/' => {
                let name_start = at + 2;
                let name_end = scan_name(bytes, name_start)?;
                let close = skip_ascii_whitespace(bytes, name_end);
                if close < bytes.len() && bytes[close] == b'>' {
                    let end = close + 1;
                    let tag = EndTag {
                        raw: self.slice(at, end),
                        name: self.slice(name_start, name_end),
                        synthetic: false,
                    };
                    return Some((Token::EndTag(tag), end));
                }
                // "</div x>" and friends are not close tags; fold into text.
                None
            }
            b if b.is_ascii_alphabetic() => {
                let name_end = scan_name(bytes, at + 1)?;
                Some(self.scan_begin_tag(at, name_end))
            }
            _ => None,
        }
    }

    /// Begin-tag attribute area. Tag-close, attribute-name, and value matches
    /// each consume input only when the whole pattern matches; a failed match
    /// consumes nothing. The loop always terminates at a tag boundary or end
    /// of input, whatever the input looks like.
    fn scan_begin_tag(&self, at: usize, name_end: usize) -> (Token<'a>, usize) {
        let bytes = self.source.as_bytes();
        let len = bytes.len();
        let mut attrs = Vec::new();
        let mut self_closing = false;
        let mut residue = None;
        let mut p = name_end;
        loop {
            let q = skip_ascii_whitespace(bytes, p);
            if q >= len {
                p = q;
                break;
            }
            // Tag close: optional '/', then '>' immediately after it.
            if bytes[q] == b'>' {
                p = q + 1;
                break;
            }
            if bytes[q] == b'/' && q + 1 < len && bytes[q + 1] == b'>' {
                self_closing = true;
                p = q + 2;
                break;
            }
            // Attribute name, then an optional value.
            if bytes[q].is_ascii_alphabetic() {
                let mut r = q + 1;
                while r < len && is_name_byte(bytes[r]) {
                    r += 1;
                }
                let name = self.slice(q, r);
                let (value, after) = self.scan_attr_value(r);
                attrs.push(Attribute { name, value });
                p = after;
                continue;
            }
            // Malformed residue: everything up to the next '<' or '>'. A '>'
            // still ends the tag (consumed); a '<' ends it without being
            // consumed; neither means the tag runs to end of input.
            let (stop, end) = match memchr2(b'<', b'>', &bytes[p..]) {
                Some(rel) if bytes[p + rel] == b'>' => (p + rel, p + rel + 1),
                Some(rel) => (p + rel, p + rel),
                None => (len, len),
            };
            if stop > p {
                log::trace!(
                    target: "markup.tokenizer",
                    "unparseable tag content at {p}..{stop} captured as residue"
                );
                residue = Some(self.slice(p, stop));
            }
            p = end;
            break;
        }
        let tag = BeginTag {
            raw: self.slice(at, p),
            name: self.slice(at + 1, name_end),
            attrs,
            self_closing,
            residue,
        };
        (Token::BeginTag(tag), p)
    }

    /// Value patterns, tried in order: `\s*=\s*("|')(.*?)\1` then
    /// `\s*=\s*[^\s>]+`. Neither consumes anything unless it matches fully,
    /// so `<a x= >` yields a valueless attribute and the rest re-parses.
    fn scan_attr_value(&self, pos: usize) -> (Option<SourceText<'a>>, usize) {
        let bytes = self.source.as_bytes();
        let len = bytes.len();
        let eq = skip_ascii_whitespace(bytes, pos);
        if eq >= len || bytes[eq] != b'=' {
            return (None, pos);
        }
        let vstart = skip_ascii_whitespace(bytes, eq + 1);
        if vstart < len && (bytes[vstart] == b'"' || bytes[vstart] == b'\'') {
            // Quoted: scan to the matching quote, newlines included. An
            // unterminated quote falls through to the unquoted pattern, which
            // then consumes the quote character itself.
            if let Some(rel) = memchr(bytes[vstart], &bytes[vstart + 1..]) {
                let vend = vstart + 1 + rel;
                return (Some(self.slice(vstart + 1, vend)), vend + 1);
            }
        }
        let mut vend = vstart;
        while vend < len && !bytes[vend].is_ascii_whitespace() && bytes[vend] != b'>' {
            vend += 1;
        }
        if vend > vstart {
            (Some(self.slice(vstart, vend)), vend)
        } else {
            (None, pos)
        }
    }

    /// Delegates the raw body after a `<script>`/`<style>` begin tag to the
    /// embedded tokenizer. The close tag, if present, is left for the next
    /// scan step, which emits it as an ordinary end tag.
    fn scan_rawtext(&mut self, kind: RawTextKind) {
        let start = self.cursor;
        let body_end = match find_rawtext_close(&self.source[start..], kind.close_tag()) {
            Some(rel) => start + rel,
            None => {
                log::trace!(
                    target: "markup.tokenizer",
                    "rawtext {kind:?} body at {start} has no close tag; consuming to end of input"
                );
                self.source.len()
            }
        };
        let source = self.source;
        let body = Span::new(start, body_end);
        let tokens = self.embedded.tokenize(kind, source, body);
        self.pending.extend(tokens);
        self.cursor = body_end;
    }

    fn slice(&self, start: usize, end: usize) -> SourceText<'a> {
        SourceText::new(self.source, Span::new(start, end))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_' | b':')
}

/// Scans a tag or attribute name at `start`: an ASCII letter followed by
/// letters, digits, '.', '-', '_' or ':'. Returns the end offset.
fn scan_name(bytes: &[u8], start: usize) -> Option<usize> {
    if start >= bytes.len() || !bytes[start].is_ascii_alphabetic() {
        return None;
    }
    let mut end = start + 1;
    while end < bytes.len() && is_name_byte(bytes[end]) {
        end += 1;
    }
    Some(end)
}

fn skip_ascii_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

// Rawtext close tags are fixed ASCII sequences and '<' cannot appear in UTF-8
// continuation bytes, so a byte-wise scan stays on char boundaries without
// allocating or lowercasing.
fn find_rawtext_close(haystack: &str, close_tag: &[u8]) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let len = bytes.len();
    let n = close_tag.len();
    debug_assert!(close_tag.starts_with(b"</"));
    let mut i = 0;
    while i + n <= len {
        let rel = memchr(b'<', &bytes[i..])?;
        i += rel;
        if i + n > len {
            return None;
        }
        if bytes[i + 1] == b'/' && bytes[i..i + n].eq_ignore_ascii_case(close_tag) {
            // Only ASCII whitespace may sit between the name and '>'.
            let mut k = i + n;
            while k < len && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < len && bytes[k] == b'>' {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}
