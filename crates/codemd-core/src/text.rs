//! Whitespace rules shared by word counting and anchors

/// Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F, which also delimit words.
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Number of whitespace-delimited tokens
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split(is_whitespace).filter(|word| !word.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_whitespace_ascii() {
        for c in [' ', '\t', '\n', '\r', '\u{0b}', '\u{0c}'] {
            assert!(is_whitespace(c), "{c:?} should be whitespace");
        }
    }

    #[test]
    fn test_is_whitespace_information_separators() {
        for c in ['\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}'] {
            assert!(is_whitespace(c), "{c:?} should be whitespace");
        }
    }

    #[test]
    fn test_is_whitespace_unicode() {
        assert!(is_whitespace('\u{85}'));
        assert!(is_whitespace('\u{a0}'));
        assert!(is_whitespace('\u{3000}'));
    }

    #[test]
    fn test_is_whitespace_rejects_visible_and_control() {
        assert!(!is_whitespace('a'));
        assert!(!is_whitespace('-'));
        assert!(!is_whitespace('\u{1b}'));
        assert!(!is_whitespace('\u{0}'));
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("one two\tthree\n"), 3);
        assert_eq!(count_words("a\u{1c}b"), 2);
        assert_eq!(count_words("a\u{1f}\u{1e} b"), 2);
    }
}
