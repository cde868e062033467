//! Parser for object property path strings.

use std::borrow::Cow;

use tracing::trace;

use crate::literal::unescape_literal;
use crate::{TokenKind, Tokenizer};

/// Parse an object path into its segments.
///
/// The grammar is total: every input produces a deterministic segment
/// sequence, with end of input closing whatever node is still open. The
/// only input with no segments is the empty string.
pub fn parse(path: &str) -> Vec<Cow<'_, str>> {
    Parser::new(path).parse_to_vec()
}

/// A parser that produces path segments from an object path string.
///
/// Segments stream out of the [`Iterator`] impl; [`parse`] collects them.
#[derive(Clone)]
pub struct Parser<'src> {
    tokens: Tokenizer<'src>,
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given path.
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: Tokenizer::new(source),
        }
    }

    /// Parse all remaining segments into a vector.
    pub fn parse_to_vec(self) -> Vec<Cow<'src, str>> {
        self.collect()
    }

    fn next_segment(&mut self) -> Option<Cow<'src, str>> {
        loop {
            let token = self.tokens.next_token();
            match token.kind {
                TokenKind::Ident => return Some(Cow::Borrowed(token.text)),
                TokenKind::LBracket => return Some(self.bracket_segment()),
                // A `.` separates nodes and a stray `]` ends one; neither
                // carries content. Empty dot runs emit no segment, which
                // keeps `a[1].b` and `a..b` free of phantom segments.
                TokenKind::Dot | TokenKind::RBracket => {}
                TokenKind::Eof => return None,
                kind => unreachable!("{kind:?} cannot occur outside a bracket"),
            }
        }
    }

    /// Assemble the segment of a bracket node, with its `[` consumed.
    fn bracket_segment(&mut self) -> Cow<'src, str> {
        let token = self.tokens.next_token();
        let segment = match token.kind {
            TokenKind::Bare => Cow::Borrowed(token.text),
            TokenKind::Quoted => unescape_literal(token.text),
            // `[]`, or end of input with the bracket still open: an empty
            // bracket node still emits its (empty) segment.
            TokenKind::RBracket | TokenKind::Eof => return Cow::Borrowed(""),
            kind => unreachable!("{kind:?} cannot open bracket content"),
        };

        // Skip to the closing `]`; anything between a quoted literal and
        // its `]` is dropped.
        loop {
            match self.tokens.next_token().kind {
                TokenKind::RBracket | TokenKind::Eof => break,
                _ => {}
            }
        }

        segment
    }
}

impl<'src> Iterator for Parser<'src> {
    type Item = Cow<'src, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.next_segment()?;
        trace!("Segment {:?}", segment);
        Some(segment)
    }
}
