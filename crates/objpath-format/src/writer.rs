//! Low-level path output writer.

use crate::options::StringifyOptions;
use crate::segment::{can_be_bare, escape_quoted, is_index};

/// Accumulates path segments into their textual form.
///
/// Per segment the writer picks between a bare dot node, an unquoted
/// index bracket, and a quoted bracket literal. Bracket nodes never take
/// a `.` prefix; dot nodes take one except at the very start of the
/// output.
#[derive(Debug)]
pub struct PathWriter {
    out: String,
    options: StringifyOptions,
}

impl PathWriter {
    /// Create a new writer with default options.
    pub fn new() -> Self {
        Self::with_options(StringifyOptions::default())
    }

    /// Create a new writer with the given options.
    pub fn with_options(options: StringifyOptions) -> Self {
        Self {
            out: String::new(),
            options,
        }
    }

    /// Append one segment.
    pub fn push(&mut self, segment: &str) {
        if self.options.always_bracket {
            self.push_quoted(segment);
        } else if is_index(segment) {
            self.out.push('[');
            self.out.push_str(segment);
            self.out.push(']');
        } else if can_be_bare(segment) {
            if !self.out.is_empty() {
                self.out.push('.');
            }
            self.out.push_str(segment);
        } else {
            self.push_quoted(segment);
        }
    }

    /// Append a quoted bracket literal.
    fn push_quoted(&mut self, segment: &str) {
        let q = self.options.quote.ch();
        self.out.push('[');
        self.out.push(q);
        self.out
            .push_str(&escape_quoted(segment, self.options.quote));
        self.out.push(q);
        self.out.push(']');
    }

    /// Consume the writer and return the path string.
    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for PathWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuoteStyle;

    #[test]
    fn test_mixed_forms() {
        let mut writer = PathWriter::new();
        for segment in ["a", "0", "b c", "d.e"] {
            writer.push(segment);
        }
        assert_eq!(writer.finish(), "a[0].b c['d.e']");
    }

    #[test]
    fn test_leading_bracket_suppresses_the_dot() {
        let mut writer = PathWriter::new();
        writer.push("0");
        writer.push("a");
        assert_eq!(writer.finish(), "[0].a");
    }

    #[test]
    fn test_quoted_output_escapes_for_the_active_style() {
        let mut writer =
            PathWriter::with_options(StringifyOptions::new().quote(QuoteStyle::Double));
        writer.push(r#"a"b\c"#);
        assert_eq!(writer.finish(), r#"["a\"b\\c"]"#);
    }
}
