//! Character-level classification shared by the word and phoneme tokenizers.

use std::sync::OnceLock;

use regex::Regex;

/// Unicode general category P (connector, dash, open/close, initial/final
/// quote and other punctuation).
pub fn is_punctuation(c: char) -> bool {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    let re = PUNCTUATION.get_or_init(|| Regex::new(r"^\p{P}$").expect("valid regex"));
    let mut buf = [0u8; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

/// Characters that make up an English word token.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Whitespace or punctuation: passed through the phoneme tokenizer one
/// character at a time.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation() {
        for c in ['.', ',', '!', '?', '\'', '"', '-', '[', ']', '(', '…', '“', '_'] {
            assert!(is_punctuation(c), "{c:?} should be punctuation");
        }
    }

    #[test]
    fn test_ipa_modifiers_are_not_punctuation() {
        for c in ['ˈ', 'ˌ', 'ː', 'ə', 'ʊ'] {
            assert!(!is_punctuation(c), "{c:?} should not be punctuation");
        }
    }

    #[test]
    fn test_symbols_are_not_punctuation() {
        for c in ['+', '$', '=', '<', '|'] {
            assert!(!is_punctuation(c), "{c:?} is a symbol, not punctuation");
        }
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('é'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char('_'));
        assert!(!is_word_char(' '));
    }

    #[test]
    fn test_separator() {
        assert!(is_separator(' '));
        assert!(is_separator('\t'));
        assert!(is_separator('.'));
        assert!(!is_separator('ə'));
        assert!(!is_separator('1'));
    }
}
