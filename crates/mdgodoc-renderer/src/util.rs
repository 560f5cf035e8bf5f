//! Shared helpers for tree building and rendering.

use pulldown_cmark::HeadingLevel;

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Language tag of a fenced code block: the first word of its info string.
pub(crate) fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace().next().map(str::to_owned)
}

/// Split off exactly one trailing space.
///
/// Returns the remaining text and whether a space was removed. Only a single
/// space is taken, so `"a  "` becomes `"a "`.
pub(crate) fn strip_trailing_space(line: &str) -> (&str, bool) {
    match line.strip_suffix(' ') {
        Some(rest) => (rest, true),
        None => (line, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level_to_num(HeadingLevel::H1), 1);
        assert_eq!(heading_level_to_num(HeadingLevel::H6), 6);
    }

    #[test]
    fn test_fence_language_first_word() {
        assert_eq!(fence_language("go title=main.go"), Some("go".to_owned()));
    }

    #[test]
    fn test_fence_language_empty() {
        assert_eq!(fence_language(""), None);
        assert_eq!(fence_language("   "), None);
    }

    #[test]
    fn test_strip_single_trailing_space() {
        assert_eq!(strip_trailing_space("word "), ("word", true));
    }

    #[test]
    fn test_strip_leaves_second_space() {
        assert_eq!(strip_trailing_space("word  "), ("word ", true));
    }

    #[test]
    fn test_strip_without_space() {
        assert_eq!(strip_trailing_space("word"), ("word", false));
        assert_eq!(strip_trailing_space(""), ("", false));
    }
}
