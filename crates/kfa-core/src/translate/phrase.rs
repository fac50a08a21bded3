use tracing::debug_span;

use super::{TranslationResult, Translator};
use crate::dict::DictError;
use crate::unicode::is_punctuation;
use crate::words::{tokenize_english_text, Token};

/// Wrap an unresolved word so later stages pass it through untouched.
pub(crate) fn bracket(word: &str) -> String {
    format!("[{word}]")
}

fn is_bracketed(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('[') && token.ends_with(']')
}

/// Split `token` into leading punctuation, core, trailing punctuation.
/// Marker brackets stay with the core.
fn split_punctuation(token: &str) -> (&str, &str, &str) {
    let rest = token.trim_start_matches(|c: char| c != '[' && is_punctuation(c));
    let core = rest.trim_end_matches(|c: char| c != ']' && is_punctuation(c));
    let lead = &token[..token.len() - rest.len()];
    (lead, core, &rest[core.len()..])
}

impl Translator<'_> {
    /// English → IPA, word by word. Whitespace and punctuation are kept in
    /// place; words missing from the dictionary become `[Word]` and are
    /// listed in `error`. Always succeeds.
    pub fn english_to_ipa(&self, text: &str) -> TranslationResult {
        let _span = debug_span!("translate_phrase", direction = "english_to_ipa").entered();
        let mut out = String::with_capacity(text.len() * 2);
        let mut errors = Vec::new();

        for token in tokenize_english_text(text) {
            match token {
                Token::Word { value, original } => match self.dict.lookup_ipa(&value) {
                    Ok(entry) => out.push_str(&entry.ipa),
                    Err(_) => {
                        out.push_str(&bracket(&original));
                        errors.push(DictError::WordNotFound(original).to_string());
                    }
                },
                Token::Punctuation(s) | Token::Whitespace(s) => out.push_str(&s),
            }
        }

        TranslationResult::with_diagnostics(out, errors)
    }

    /// IPA → English over whitespace-separated IPA words. Punctuation
    /// around a word is kept around its translation. Bracketed words from
    /// an earlier stage are kept as they are; unknown IPA becomes `[ipa]`.
    /// The output is single-space joined. Always succeeds.
    pub fn ipa_to_english(&self, text: &str) -> TranslationResult {
        let _span = debug_span!("translate_phrase", direction = "ipa_to_english").entered();
        let mut words: Vec<String> = Vec::new();
        let mut errors = Vec::new();

        for token in text.split_whitespace() {
            let (lead, ipa, trail) = split_punctuation(token);
            if ipa.is_empty() || is_bracketed(ipa) {
                words.push(token.to_string());
                continue;
            }
            let word = match self.dict.lookup_english(ipa) {
                Ok(word) => word.to_string(),
                Err(e) => {
                    errors.push(e.to_string());
                    bracket(ipa)
                }
            };
            words.push(format!("{lead}{word}{trail}"));
        }

        TranslationResult::with_diagnostics(words.join(" "), errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bracketed() {
        assert!(is_bracketed("[foo]"));
        assert!(is_bracketed("[]"));
        assert!(!is_bracketed("["));
        assert!(!is_bracketed("]"));
        assert!(!is_bracketed("[foo"));
        assert!(!is_bracketed("foo]"));
    }

    #[test]
    fn test_split_punctuation() {
        assert_eq!(split_punctuation("kæt"), ("", "kæt", ""));
        assert_eq!(split_punctuation("kæt,"), ("", "kæt", ","));
        assert_eq!(split_punctuation("(kæt)."), ("(", "kæt", ")."));
        assert_eq!(split_punctuation("[Zorp]."), ("", "[Zorp]", "."));
        assert_eq!(split_punctuation("\"[Zorp]!"), ("\"", "[Zorp]", "!"));
        assert_eq!(split_punctuation("..."), ("...", "", ""));
    }
}
