use std::sync::OnceLock;

use super::config::{parse_phonemes_toml, PhonemeConfigError, PhonemeTables};
use super::trie::{PhonemeTrie, TrieLookupResult};

pub const DEFAULT_TOML: &str = include_str!("default_phonemes.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom phoneme TOML before the first table access.
pub fn init_custom(toml_content: String) -> Result<(), PhonemeConfigError> {
    // Validate eagerly
    parse_phonemes_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| PhonemeConfigError::AlreadyInitialized)
}

/// Returns the embedded default phoneme TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

fn tables() -> &'static PhonemeTables {
    static INSTANCE: OnceLock<PhonemeTables> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TOML);
        parse_phonemes_toml(toml_str).expect("phoneme TOML must be valid")
    })
}

/// Stress marks that are dropped when they are not part of a longer symbol.
pub fn is_stress_mark(c: char) -> bool {
    tables().stress_marks.contains(&c)
}

/// Rare IPA letters that have no kfa spelling.
pub fn is_exotic(c: char) -> bool {
    tables().exotic.contains(&c)
}

/// Ordered mapping between two phoneme alphabets.
///
/// Lookup always takes the longest source symbol matching the input, which is
/// the same as trying sources in descending length with ties broken by table
/// order. The table is immutable once built.
pub struct SymbolTable {
    pairs: Vec<(String, String)>,
    trie: PhonemeTrie,
}

impl SymbolTable {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let trie = PhonemeTrie::from_pairs(pairs.iter().map(|(s, t)| (s.as_str(), t.as_str())));
        Self { pairs, trie }
    }

    /// IPA → kfa table (global singleton).
    pub fn ipa_to_kfa() -> &'static SymbolTable {
        static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();
        INSTANCE.get_or_init(|| SymbolTable::from_pairs(tables().ipa_to_kfa.clone()))
    }

    /// kfa → IPA table, the memoized inverse of [`SymbolTable::ipa_to_kfa`].
    pub fn kfa_to_ipa() -> &'static SymbolTable {
        static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();
        INSTANCE.get_or_init(|| SymbolTable::ipa_to_kfa().inverse())
    }

    /// IPA → eSpeak phoneme mnemonic table (global singleton).
    pub fn ipa_to_espeak() -> &'static SymbolTable {
        static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();
        INSTANCE.get_or_init(|| SymbolTable::from_pairs(tables().ipa_to_espeak.clone()))
    }

    /// Swap sources and targets. When several sources share a target, the
    /// first one in table order becomes that target's reverse mapping.
    pub fn inverse(&self) -> SymbolTable {
        let mut reversed: Vec<(String, String)> = Vec::with_capacity(self.pairs.len());
        for (source, target) in &self.pairs {
            if !reversed.iter().any(|(t, _)| t == target) {
                reversed.push((target.clone(), source.clone()));
            }
        }
        SymbolTable::from_pairs(reversed)
    }

    pub fn get(&self, source: &str) -> Option<String> {
        match self.trie.lookup(source) {
            TrieLookupResult::Exact(target) | TrieLookupResult::ExactAndPrefix(target) => {
                Some(target)
            }
            TrieLookupResult::Prefix | TrieLookupResult::None => None,
        }
    }

    pub fn lookup(&self, source: &str) -> TrieLookupResult {
        self.trie.lookup(source)
    }

    /// Longest source symbol at the start of `text`: (byte length, target).
    pub fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        self.trie.longest_match(text)
    }

    /// Source symbols in the order lookup effectively tries them.
    pub fn search_order(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.pairs.iter().map(|(s, _)| s.as_str()).collect();
        keys.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));
        keys
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn test_global_ipa_to_kfa() {
        let table = SymbolTable::ipa_to_kfa();
        assert_eq!(table.get("əʊ").as_deref(), Some("uO"));
        assert_eq!(table.get("θ").as_deref(), Some("T"));
        assert_eq!(table.get("ð").as_deref(), Some("T"));
        assert_eq!(table.get("x"), None);
    }

    #[test]
    fn test_inverse_first_source_wins() {
        let table = SymbolTable::kfa_to_ipa();
        assert_eq!(table.get("uO").as_deref(), Some("əʊ"));
        assert_eq!(table.get("T").as_deref(), Some("θ"));
        assert_eq!(table.get("u").as_deref(), Some("ə"));
        assert_eq!(table.get("o").as_deref(), Some("ɑː"));
        assert_eq!(table.get("ur").as_deref(), Some("ʊə"));
        assert_eq!(table.get("y").as_deref(), Some("iː"));
    }

    #[test]
    fn test_inverse_is_memoized() {
        let a = SymbolTable::kfa_to_ipa() as *const SymbolTable;
        let b = SymbolTable::kfa_to_ipa() as *const SymbolTable;
        assert_eq!(a, b);
    }

    #[test]
    fn test_search_order_is_longest_first_and_stable() {
        let table = SymbolTable::from_pairs(pairs(&[
            ("a", "1"),
            ("bc", "2"),
            ("d", "3"),
            ("efg", "4"),
            ("hi", "5"),
        ]));
        assert_eq!(table.search_order(), vec!["efg", "bc", "hi", "a", "d"]);
    }

    #[test]
    fn test_every_entry_matches_itself() {
        for table in [SymbolTable::ipa_to_kfa(), SymbolTable::ipa_to_espeak()] {
            for (source, _) in table.pairs() {
                let (len, _) = table
                    .longest_match(source)
                    .unwrap_or_else(|| panic!("no match for {source}"));
                assert_eq!(len, source.len(), "{source} matched a shorter key");
            }
        }
    }

    #[test]
    fn test_stress_and_exotic_sets() {
        assert!(is_stress_mark('ˈ'));
        assert!(is_stress_mark('ˌ'));
        assert!(!is_stress_mark('a'));
        assert!(is_exotic('ɾ'));
        assert!(is_exotic('ʔ'));
        assert!(!is_exotic('ə'));
        assert!(!is_exotic('q'));
    }

    #[test]
    fn test_lookup_prefix_state() {
        let table = SymbolTable::ipa_to_kfa();
        assert_eq!(table.lookup("si"), TrieLookupResult::Prefix);
        assert_eq!(
            table.lookup("siˈ"),
            TrieLookupResult::ExactAndPrefix("sy".into())
        );
    }
}
