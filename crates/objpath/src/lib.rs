#![doc = include_str!("../README.md")]

pub use objpath_format::{
    PathWriter, QuoteStyle, StringifyOptions, can_be_bare, escape_quoted, is_index, stringify,
    stringify_with,
};
pub use objpath_parse::{
    Parser, Span, Token, TokenKind, Tokenizer, parse, unescape_literal,
};

/// Canonicalize a path into dot-preferred form with default options.
///
/// Parse-then-stringify: `["a"]["b"][3]` becomes `a.b[3]`. A segment
/// *sequence* is canonicalized by [`stringify`] directly.
pub fn normalize(path: &str) -> String {
    normalize_with(path, &StringifyOptions::default())
}

/// Canonicalize a path with the given stringify options.
pub fn normalize_with(path: &str, options: &StringifyOptions) -> String {
    stringify_with(parse(path), options)
}
