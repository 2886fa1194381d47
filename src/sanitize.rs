//! Free-text sanitization.
//!
//! Removes characters that cannot appear in an XML document: every control
//! character except tab and line feed, and the non-characters U+FFFE and
//! U+FFFF.

use std::borrow::Cow;

/// A text sanitizer, as installed in [`crate::metadata::FilterMetadata`]
pub type Sanitizer = for<'a> fn(&'a str) -> Cow<'a, str>;

/// True for characters [`sanitize`] keeps
pub fn is_allowed(c: char) -> bool {
    match c {
        '\t' | '\n' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        _ => !c.is_control(),
    }
}

/// Strip control characters except `\t` and `\n`, plus the non-characters U+FFFE and U+FFFF.
///
/// Borrows the input when there is nothing to remove.
///
/// ```
/// use omemeta::sanitize::sanitize;
///
/// assert_eq!(sanitize("a\u{0}b\tc\r\n"), "ab\tc\n");
/// assert!(matches!(sanitize("clean"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_allowed) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_allowed(c)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_is_borrowed() {
        assert!(matches!(sanitize("Sample <1> µm"), Cow::Borrowed(_)));
        assert!(matches!(sanitize(""), Cow::Borrowed(_)));
    }

    #[test]
    fn test_control_characters_removed() {
        assert_eq!(sanitize("a\u{1}b\u{1f}c\u{7f}d"), "abcd");
        assert_eq!(sanitize("x\u{85}y\u{9f}"), "xy");
        assert_eq!(sanitize("line\r\nnext"), "line\nnext");
    }

    #[test]
    fn test_xml_noncharacters_removed() {
        assert_eq!(sanitize("a\u{FFFE}b\u{FFFF}c"), "abc");
        assert!(!is_allowed('\u{FFFF}'));
        assert_eq!(sanitize("\u{FFFD}\u{10FFFF}"), "\u{FFFD}\u{10FFFF}");
    }

    #[test]
    fn test_tab_and_newline_kept() {
        assert_eq!(sanitize("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn test_markup_characters_untouched() {
        assert_eq!(sanitize("<b>&amp;</b>"), "<b>&amp;</b>");
    }
}
