//! Tolerant single-pass HTML tokenizer with bounded lookahead.
//!
//! [`Tokenizer`] turns a complete HTML string into a forward-only stream of
//! [`Token`]s: text runs, begin/end tags, comments, and markup directives.
//! Tokens are borrowed views over the source string; nothing is copied until
//! a caller materializes it.
//!
//! Malformed markup never fails the scan: a stray `<` folds into the
//! surrounding text run, unparseable tag content is preserved as residue, and
//! unterminated comments or rawtext bodies degrade to text. `<script>` and
//! `<style>` bodies are not markup-scanned; they are delegated to an
//! [`EmbeddedTokenizer`] (by default one that yields the body as a single
//! text token).
//!
//! Concatenating [`Token::raw`] over a full drain reproduces the input
//! byte-for-byte, which is what [`Tokenizer::collect_html_until`] relies on.

mod collect;
mod embedded;
mod span;
mod text;
mod token;
mod tokenizer;

pub use crate::embedded::{EmbeddedTokenizer, RawTextKind, RawTextTokenizer};
pub use crate::span::Span;
pub use crate::text::SourceText;
pub use crate::token::{Attribute, BeginTag, EndTag, Token, is_void_element};
pub use crate::tokenizer::{Tokenizer, TokenizerConfig};
