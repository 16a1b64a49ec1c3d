//! Balanced collection over the token stream.

use crate::token::Token;
use crate::tokenizer::Tokenizer;

impl<'a> Tokenizer<'a> {
    /// Consumes tokens until the balanced matching end tag and returns the
    /// concatenated text content.
    ///
    /// Matching begin tags increment a depth counter starting at 1; matching
    /// end tags decrement it; collection stops when it reaches zero. The
    /// terminating end tag is consumed but not part of the output. Each text
    /// run is trimmed and non-empty runs are joined with single spaces: tags
    /// and comments are elided but separate the runs. If the stream ends
    /// before the match, whatever accumulated is returned.
    pub fn collect_text_until(&mut self, end_tag: &str) -> String {
        assert!(!end_tag.is_empty(), "collect target name must be non-empty");
        let mut out = String::new();
        let mut depth = 1usize;
        while let Some(token) = self.next_token() {
            match token {
                Token::BeginTag(tag) if tag.name_is(end_tag) => depth += 1,
                Token::EndTag(tag) if tag.name_is(end_tag) => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                Token::Text(text) => {
                    let run = text.as_str().trim();
                    if !run.is_empty() {
                        if !out.is_empty() {
                            out.push(' ');
                        }
                        out.push_str(run);
                    }
                }
                _ => {}
            }
        }
        out
    }

    /// Consumes tokens until the balanced matching end tag and returns the
    /// literal markup of everything consumed.
    ///
    /// Unlike `collect_text_until`, nothing is elided and no separators are
    /// inserted: the output is the raw source slice of every consumed token,
    /// excluding the terminating end tag. The asymmetry between the two
    /// collectors is deliberate and load-bearing for round-trip consumers.
    pub fn collect_html_until(&mut self, end_tag: &str) -> String {
        assert!(!end_tag.is_empty(), "collect target name must be non-empty");
        let mut out = String::new();
        let mut depth = 1usize;
        while let Some(token) = self.next_token() {
            match &token {
                Token::BeginTag(tag) if tag.name_is(end_tag) => depth += 1,
                Token::EndTag(tag) if tag.name_is(end_tag) => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            out.push_str(token.raw());
        }
        out
    }
}
