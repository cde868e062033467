#![doc = include_str!("../README.md")]

pub use objpath_tokenizer::{Span, Token, TokenKind, Tokenizer};

mod literal;
pub use literal::unescape_literal;

mod parser;
pub use parser::{Parser, parse};
