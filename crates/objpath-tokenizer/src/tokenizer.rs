//! Tokenizer for object property path strings.

use crate::{Span, Token, TokenKind};
use tracing::trace;

/// Where the tokenizer sits relative to a bracket node.
///
/// Bracket content follows different rules from the rest of the path: a
/// quote character opens a literal only when it is the first character
/// after `[`, and everything else runs verbatim to the closing `]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BracketState {
    /// Outside any bracket node.
    Outside,
    /// Immediately after `[`.
    Open,
    /// After the bracket content, before the closing `]`.
    Content,
}

/// A tokenizer that produces tokens from an object path string.
///
/// Total over arbitrary input: every byte sequence tokenizes, with end of
/// input acting as an implicit terminator for an open literal.
#[derive(Clone)]
pub struct Tokenizer<'src> {
    /// The source text being tokenized.
    source: &'src str,
    /// The remaining source text (suffix of `source`).
    remaining: &'src str,
    /// Current byte position in `source`.
    pos: u32,
    /// Bracket-node context at the current position.
    bracket: BracketState,
}

impl<'src> Tokenizer<'src> {
    /// Create a new tokenizer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            remaining: source,
            pos: 0,
            bracket: BracketState::Outside,
        }
    }

    /// Check if we're at the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    /// Advance by one character and return it.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8() as u32;
        self.remaining = &self.remaining[c.len_utf8()..];
        Some(c)
    }

    /// Create a token from the given start position to current position.
    fn token(&self, kind: TokenKind, start: u32) -> Token<'src> {
        let span = Span::new(start, self.pos);
        let text = span.slice(self.source);
        trace!("Token {:?} at {:?}: {:?}", kind, span, text);
        Token::new(kind, span, text)
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        if self.is_eof() {
            return self.token(TokenKind::Eof, self.pos);
        }

        let start = self.pos;
        match self.bracket {
            BracketState::Outside => match self.peek() {
                Some('.') => {
                    self.advance();
                    self.token(TokenKind::Dot, start)
                }
                Some('[') => {
                    self.advance();
                    self.bracket = BracketState::Open;
                    self.token(TokenKind::LBracket, start)
                }
                // A `]` with no bracket open; the parser takes it as a
                // node boundary.
                Some(']') => {
                    self.advance();
                    self.token(TokenKind::RBracket, start)
                }
                _ => self.tokenize_ident(),
            },
            BracketState::Open => match self.peek() {
                Some(']') => self.close_bracket(),
                Some(q @ ('\'' | '"')) => {
                    self.bracket = BracketState::Content;
                    self.tokenize_quoted(q)
                }
                _ => {
                    self.bracket = BracketState::Content;
                    self.tokenize_bare()
                }
            },
            BracketState::Content => match self.peek() {
                Some(']') => self.close_bracket(),
                // Anything between a literal and its `]`; the parser
                // discards it.
                _ => self.tokenize_bare(),
            },
        }
    }

    /// Consume a closing `]` and leave the bracket node.
    fn close_bracket(&mut self) -> Token<'src> {
        let start = self.pos;
        self.advance();
        self.bracket = BracketState::Outside;
        self.token(TokenKind::RBracket, start)
    }

    /// Tokenize a dot-notation identifier: a run of anything but `.`, `[`, `]`.
    fn tokenize_ident(&mut self) -> Token<'src> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_ident_char(c) {
                self.advance();
            } else {
                break;
            }
        }
        self.token(TokenKind::Ident, start)
    }

    /// Tokenize unquoted bracket content, verbatim up to `]` or end of input.
    fn tokenize_bare(&mut self) -> Token<'src> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == ']' {
                break;
            }
            self.advance();
        }
        self.token(TokenKind::Bare, start)
    }

    /// Tokenize a quoted bracket literal delimited by `quote`.
    ///
    /// A backslash consumes the character after it, so a delimiter preceded
    /// by an odd number of backslashes is content rather than the
    /// terminator. The token text keeps the delimiters and all escapes;
    /// unescaping happens at the parse layer.
    fn tokenize_quoted(&mut self, quote: char) -> Token<'src> {
        let start = self.pos;

        // Consume opening quote
        self.advance();

        loop {
            match self.peek() {
                // Unterminated literal: end of input closes it
                None => break,
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    // Escape pair - consume backslash and next char
                    self.advance();
                    if self.peek().is_some() {
                        self.advance();
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        self.token(TokenKind::Quoted, start)
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

/// Check if a character can appear in a dot-notation identifier.
fn is_ident_char(c: char) -> bool {
    !matches!(c, '.' | '[' | ']')
}
