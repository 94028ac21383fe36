//! Text processing utilities for question titles.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters kept from a title source.
pub const TITLE_MAX_CHARS: usize = 80;

/// Marker appended when a title source was truncated.
pub const ELLIPSIS: char = '…';

/// Regex matching runs of whitespace, including newlines.
static WHITESPACE_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Derive a question title from the text of its first user message.
///
/// Leading/trailing whitespace is trimmed and internal whitespace runs
/// collapse to single spaces, then the result is cut to the first
/// [`TITLE_MAX_CHARS`] characters with an ellipsis marker appended when the
/// source was longer. Counting is in `char`s, so multi-byte text never
/// splits mid-character.
pub fn derive_title(source: &str) -> String {
    let collapsed = WHITESPACE_RUN_REGEX.replace_all(source.trim(), " ");
    let mut chars = collapsed.chars();
    let title: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        let mut truncated = title;
        truncated.push(ELLIPSIS);
        truncated
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_source_unchanged() {
        let source = "What is the capital of Peru?";
        assert_eq!(derive_title(source), source);
    }

    #[test]
    fn test_long_source_truncated_with_ellipsis() {
        let source = "x".repeat(100);
        let title = derive_title(&source);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 1);
        assert!(title.ends_with(ELLIPSIS));
        assert!(title.starts_with(&"x".repeat(TITLE_MAX_CHARS)));
    }

    #[test]
    fn test_exactly_max_chars_unchanged() {
        let source = "y".repeat(TITLE_MAX_CHARS);
        assert_eq!(derive_title(&source), source);
    }

    #[test]
    fn test_one_over_max_truncates() {
        let source = "z".repeat(TITLE_MAX_CHARS + 1);
        let title = derive_title(&source);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 1);
        assert!(title.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(derive_title("  How\ndo\t\tI   sort? "), "How do I sort?");
    }

    #[test]
    fn test_multibyte_boundary_safe() {
        let source = "é".repeat(90);
        let title = derive_title(&source);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 1);
        assert!(title.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(derive_title(""), "");
        assert_eq!(derive_title("   \n "), "");
    }
}
