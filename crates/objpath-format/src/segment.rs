//! Segment classification and escaping.
//!
//! Decides how a single segment can be written (bare dot node, unquoted
//! index bracket, quoted literal) and escapes content for quoted output.

use std::borrow::Cow;

use crate::QuoteStyle;

/// Check if a segment renders as an unquoted bracket index.
///
/// Index-looking segments are entirely ASCII decimal digits, at least one.
/// They can never be dot-joined - a leading digit is not a bare identifier
/// start - and they stay unquoted because bracket content re-parses
/// verbatim.
pub fn is_index(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Check if a segment can be written as a bare dot-notation node.
///
/// Dots and brackets would change the parse, and a leading quote could
/// read as a literal delimiter, so all of `.`, `[`, `]`, `'`, `"` force
/// bracket form. Everything else, non-ASCII included, passes through dot
/// notation verbatim.
pub fn can_be_bare(s: &str) -> bool {
    !s.is_empty()
        && !s
            .chars()
            .any(|c| matches!(c, '.' | '[' | ']' | '\'' | '"'))
}

/// Escape a segment for a quoted bracket literal delimited by `quote`.
///
/// Backslashes double and the active quote character takes a backslash in
/// front; the non-active quote character needs none. Returns the escaped
/// content without its delimiters.
pub fn escape_quoted(s: &str, quote: QuoteStyle) -> Cow<'_, str> {
    let q = quote.ch();
    if !s.chars().any(|c| c == '\\' || c == q) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        if c == '\\' || c == q {
            result.push('\\');
        }
        result.push(c);
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_index() {
        assert!(is_index("5"));
        assert!(is_index("05"));
        assert!(is_index("123456"));

        assert!(!is_index(""));
        assert!(!is_index("5a"));
        assert!(!is_index("-5"));
        // Only ASCII digits count; these re-parse fine as dot nodes
        assert!(!is_index("５"));
    }

    #[test]
    fn test_can_be_bare() {
        assert!(can_be_bare("a"));
        assert!(can_be_bare("_private"));
        assert!(can_be_bare("with space"));
        assert!(can_be_bare("∑´ƒ©∫∆"));
        assert!(can_be_bare(r#"back\slash"#));

        assert!(!can_be_bare(""));
        assert!(!can_be_bare("a.b"));
        assert!(!can_be_bare("a[0"));
        assert!(!can_be_bare("a]"));
        assert!(!can_be_bare("it's"));
        assert!(!can_be_bare(r#"say "hi""#));
    }

    #[test]
    fn test_escape_quoted() {
        let q = QuoteStyle::Apostrophe;
        assert_eq!(escape_quoted("hello", q), "hello");
        assert_eq!(escape_quoted("it's", q), r#"it\'s"#);
        assert_eq!(escape_quoted(r#"a\b"#, q), r#"a\\b"#);
        assert_eq!(escape_quoted(r#"\'"#, q), r#"\\\'"#);
    }

    #[test]
    fn test_escape_leaves_the_other_quote_alone() {
        assert_eq!(escape_quoted("it's", QuoteStyle::Double), "it's");
        assert_eq!(
            escape_quoted(r#"say "hi""#, QuoteStyle::Apostrophe),
            r#"say "hi""#
        );
    }

    #[test]
    fn test_escape_borrows_when_clean() {
        assert!(matches!(
            escape_quoted("plain", QuoteStyle::Apostrophe),
            Cow::Borrowed(_)
        ));
        assert!(matches!(
            escape_quoted("it's", QuoteStyle::Double),
            Cow::Borrowed(_)
        ));
        assert!(matches!(
            escape_quoted("it's", QuoteStyle::Apostrophe),
            Cow::Owned(_)
        ));
    }
}
