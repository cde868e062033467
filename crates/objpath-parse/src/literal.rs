//! Quoted-literal unescaping.

use std::borrow::Cow;

/// Unescape the content of a quoted bracket literal.
///
/// `text` is the literal as tokenized: its opening quote, the raw content,
/// and the closing quote when the literal was terminated. Within the
/// content, `\\` becomes `\` and a backslash-escaped delimiter becomes the
/// delimiter; a backslash in front of anything else stays in the segment,
/// so the non-matching quote character passes through verbatim, backslash
/// included.
pub fn unescape_literal(text: &str) -> Cow<'_, str> {
    let mut chars = text.chars();
    let Some(quote) = chars.next() else {
        return Cow::Borrowed(text);
    };
    debug_assert!(matches!(quote, '\'' | '"'));
    let inner = chars.as_str();

    // Without a backslash the only delimiter in `inner` is the terminator.
    if !inner.contains('\\') {
        return Cow::Borrowed(inner.strip_suffix(quote).unwrap_or(inner));
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&n) if n == '\\' || n == quote => {
                    chars.next();
                    out.push(n);
                }
                // A backslash escaping nothing stays put.
                _ => out.push('\\'),
            },
            c if c == quote => break,
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
