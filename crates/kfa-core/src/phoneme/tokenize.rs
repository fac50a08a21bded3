use tracing::debug_span;

use super::table::SymbolTable;
use crate::unicode::is_separator;

/// One segment of phoneme-alphabet text. Concatenating the sources of all
/// tokens gives back the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhonemeToken<'a> {
    /// A single whitespace or punctuation character.
    Separator(&'a str),
    /// A `[...]` run left by an earlier stage that could not resolve a word.
    Marker(&'a str),
    /// The longest table source matching at this position.
    Symbol { source: &'a str, target: &'a str },
    /// A single character no table source starts with.
    Unmatched(&'a str),
}

impl<'a> PhonemeToken<'a> {
    pub fn source(&self) -> &'a str {
        match self {
            PhonemeToken::Separator(s) | PhonemeToken::Marker(s) | PhonemeToken::Unmatched(s) => {
                s
            }
            PhonemeToken::Symbol { source, .. } => source,
        }
    }
}

/// Segment `text` into longest-match symbols of `table`.
pub fn tokenize_phonemes<'a>(text: &'a str, table: &'a SymbolTable) -> Vec<PhonemeToken<'a>> {
    let _span = debug_span!("tokenize_phonemes", len = text.len()).entered();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        let rest = &text[pos..];

        if let Some(len) = marker_len(rest) {
            tokens.push(PhonemeToken::Marker(&rest[..len]));
            pos += len;
            continue;
        }

        if is_separator(c) {
            let len = c.len_utf8();
            tokens.push(PhonemeToken::Separator(&rest[..len]));
            pos += len;
            continue;
        }

        match table.longest_match(rest) {
            Some((len, target)) => {
                tokens.push(PhonemeToken::Symbol {
                    source: &rest[..len],
                    target,
                });
                pos += len;
            }
            None => {
                let len = c.len_utf8();
                tokens.push(PhonemeToken::Unmatched(&rest[..len]));
                pos += len;
            }
        }
    }

    tokens
}

/// Byte length of a `[...]` marker at the start of `text`. Markers never
/// contain whitespace or nested brackets.
fn marker_len(text: &str) -> Option<usize> {
    let inner = text.strip_prefix('[')?;
    for (i, c) in inner.char_indices() {
        match c {
            ']' => return Some(i + 2),
            '[' => return None,
            c if c.is_whitespace() => return None,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources<'a>(tokens: &[PhonemeToken<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.source()).collect()
    }

    #[test]
    fn test_longest_match_wins() {
        let table = SymbolTable::ipa_to_kfa();
        let tokens = tokenize_phonemes("siˈɪŋ", table);
        assert_eq!(sources(&tokens), vec!["siˈɪ", "ŋ"]);
    }

    #[test]
    fn test_diphthong_not_split() {
        let table = SymbolTable::ipa_to_kfa();
        let tokens = tokenize_phonemes("gəʊ", table);
        assert_eq!(sources(&tokens), vec!["g", "əʊ"]);
        assert_eq!(
            tokens[1],
            PhonemeToken::Symbol {
                source: "əʊ",
                target: "uO"
            }
        );
    }

    #[test]
    fn test_three_char_key_not_decomposed() {
        let table = SymbolTable::ipa_to_kfa();
        let tokens = tokenize_phonemes("biˈ", table);
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0],
            PhonemeToken::Symbol {
                source: "biˈ",
                target: "by"
            }
        );
    }

    #[test]
    fn test_separators_one_char_each() {
        let table = SymbolTable::ipa_to_kfa();
        let tokens = tokenize_phonemes("k  t.", table);
        assert_eq!(sources(&tokens), vec!["k", " ", " ", "t", "."]);
        assert_eq!(tokens[1], PhonemeToken::Separator(" "));
        assert_eq!(tokens[4], PhonemeToken::Separator("."));
    }

    #[test]
    fn test_unmatched_passthrough() {
        let table = SymbolTable::ipa_to_kfa();
        let tokens = tokenize_phonemes("x7", table);
        assert_eq!(
            tokens,
            vec![PhonemeToken::Unmatched("x"), PhonemeToken::Unmatched("7")]
        );
    }

    #[test]
    fn test_marker_is_opaque() {
        let table = SymbolTable::ipa_to_kfa();
        let tokens = tokenize_phonemes("kæt [Blorp] dɒg", table);
        assert!(tokens.contains(&PhonemeToken::Marker("[Blorp]")));
        assert_eq!(sources(&tokens).concat(), "kæt [Blorp] dɒg");
    }

    #[test]
    fn test_unclosed_bracket_is_punctuation() {
        let table = SymbolTable::ipa_to_kfa();
        let tokens = tokenize_phonemes("[kæt", table);
        assert_eq!(tokens[0], PhonemeToken::Separator("["));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_bracket_with_space_is_not_marker() {
        assert_eq!(marker_len("[a b]"), None);
        assert_eq!(marker_len("[ab]c"), Some(4));
        assert_eq!(marker_len("[[ab]]"), None);
        assert_eq!(marker_len("[]"), Some(2));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize_phonemes("", SymbolTable::ipa_to_kfa()).is_empty());
    }
}
