//! Stringify options.

/// Which quote character delimits quoted bracket literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `['…']`
    #[default]
    Apostrophe,
    /// `["…"]`
    Double,
}

impl QuoteStyle {
    /// The delimiter character.
    #[inline]
    pub fn ch(self) -> char {
        match self {
            QuoteStyle::Apostrophe => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Options for rendering segments back into path text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringifyOptions {
    /// Quote character for quoted bracket literals.
    pub quote: QuoteStyle,
    /// Render every segment as a quoted bracket literal instead of
    /// preferring dot notation (default: false).
    pub always_bracket: bool,
}

impl StringifyOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the quote style.
    pub fn quote(mut self, quote: QuoteStyle) -> Self {
        self.quote = quote;
        self
    }

    /// Render every segment as a quoted bracket literal.
    pub fn always_bracket(mut self) -> Self {
        self.always_bracket = true;
        self
    }
}
