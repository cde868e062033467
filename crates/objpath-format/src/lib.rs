//! Stringifier for object property paths.
//!
//! Renders an ordered sequence of path segments back into path text,
//! preferring compact dot notation unless the options say otherwise.
//! Re-parsing the output always reproduces the input segments exactly,
//! whatever characters they contain.

mod options;
mod segment;
mod writer;

pub use options::{QuoteStyle, StringifyOptions};
pub use segment::{can_be_bare, escape_quoted, is_index};
pub use writer::PathWriter;

/// Render segments as a path string with default options.
pub fn stringify<I>(segments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    stringify_with(segments, &StringifyOptions::default())
}

/// Render segments as a path string with the given options.
pub fn stringify_with<I>(segments: I, options: &StringifyOptions) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut writer = PathWriter::with_options(*options);
    for segment in segments {
        writer.push(segment.as_ref());
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_stay_bracketed() {
        assert_eq!(stringify(["5", "a", "3"]), "[5].a[3]");
    }

    #[test]
    fn first_dot_segment_takes_no_separator() {
        assert_eq!(stringify(["a", "b"]), "a.b");
        assert_eq!(stringify(["1", "a"]), "[1].a");
    }

    #[test]
    fn always_bracket_quotes_every_segment() {
        let options = StringifyOptions::new().always_bracket();
        assert_eq!(
            stringify_with(["a", "1", "b", "c", "d", "e", "f", "g"], &options),
            "['a']['1']['b']['c']['d']['e']['f']['g']"
        );
    }

    #[test]
    fn quoting_follows_the_selected_style() {
        let options = StringifyOptions::new().quote(QuoteStyle::Double);
        assert_eq!(
            stringify_with(["it's", r#"say "hi""#], &options),
            r#"["it's"]["say \"hi\""]"#
        );
    }

    #[test]
    fn the_empty_segment_renders_as_an_empty_literal() {
        assert_eq!(stringify([""]), "['']");
        assert_eq!(stringify(["a", "", "b"]), "a[''].b");
    }

    #[test]
    fn empty_path_renders_empty() {
        assert_eq!(stringify(Vec::<String>::new()), "");
    }

    #[test]
    fn non_ascii_segments_go_bare() {
        assert_eq!(stringify(["∑´ƒ©∫∆", "ø"]), "∑´ƒ©∫∆.ø");
    }

    #[test]
    fn owned_and_borrowed_segments_both_work() {
        let owned = vec![String::from("a"), String::from("0")];
        assert_eq!(stringify(&owned), "a[0]");
        assert_eq!(stringify(owned), "a[0]");
    }
}
