//! English pronunciation dictionary.
//!
//! `PronunciationDictionary` maps lowercase English words to their recorded
//! IPA pronunciations and keeps a reverse IPA → words index built at load
//! time. Word order from the source data is preserved throughout, since the
//! reverse index resolves homophones to the first word that produced them.

mod entry;
pub mod source;
#[cfg(test)]
mod tests;

pub use entry::DictEntry;

use std::collections::HashMap;
use std::fmt;
use std::io;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("Word \"{0}\" not found in dictionary")]
    WordNotFound(String),

    #[error("IPA \"{0}\" not found in dictionary")]
    IpaNotFound(String),
}

pub struct PronunciationDictionary {
    words: Vec<(String, Vec<DictEntry>)>,
    index: HashMap<String, usize>,
    reverse: HashMap<String, Vec<String>>,
}

impl PronunciationDictionary {
    /// Build from `(word, entries)` pairs in source order. A word that appears
    /// twice keeps its first position and accumulates both entry lists.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<DictEntry>)>) -> Self {
        let mut words: Vec<(String, Vec<DictEntry>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (word, list) in entries {
            match index.get(&word) {
                Some(&i) => words[i].1.extend(list),
                None => {
                    index.insert(word.clone(), words.len());
                    words.push((word, list));
                }
            }
        }

        let mut reverse: HashMap<String, Vec<String>> = HashMap::new();
        for (word, list) in &words {
            for entry in list {
                let candidates = reverse.entry(entry.ipa.clone()).or_default();
                if !candidates.contains(word) {
                    candidates.push(word.clone());
                }
            }
        }

        Self {
            words,
            index,
            reverse,
        }
    }

    /// Parse the JSON resource format: `{ "word": [{ipa, priority, region}] }`.
    pub fn from_json(json: &str) -> Result<Self, DictError> {
        let OrderedWords(words) =
            serde_json::from_str(json).map_err(|e| DictError::Parse(e.to_string()))?;

        for (word, list) in &words {
            if list.iter().any(|e| e.priority == 0) {
                return Err(DictError::Parse(format!(
                    "priority must be at least 1 (word \"{word}\")"
                )));
            }
        }

        let dict = Self::from_entries(words);
        debug!(
            words = dict.len(),
            ipa_keys = dict.reverse.len(),
            "pronunciation dictionary built"
        );
        Ok(dict)
    }

    /// Serialize back to the JSON resource format, preserving word order.
    pub fn to_json(&self) -> Result<String, DictError> {
        serde_json::to_string_pretty(&WordsRef(&self.words))
            .map_err(|e| DictError::Serialize(e.to_string()))
    }

    /// All entries for `word` (trimmed, lowercased) in stored order.
    pub fn pronunciations(&self, word: &str) -> Option<&[DictEntry]> {
        let key = word.trim().to_lowercase();
        self.index
            .get(&key)
            .map(|&i| self.words[i].1.as_slice())
            .filter(|list| !list.is_empty())
    }

    /// The preferred pronunciation: lowest priority number, first stored on ties.
    pub fn lookup_ipa(&self, word: &str) -> Result<&DictEntry, DictError> {
        self.pronunciations(word)
            .and_then(|list| {
                list.iter()
                    .reduce(|best, e| if e.priority < best.priority { e } else { best })
            })
            .ok_or_else(|| DictError::WordNotFound(word.to_string()))
    }

    /// The first indexed English word pronounced exactly as `ipa` (trimmed).
    pub fn lookup_english(&self, ipa: &str) -> Result<&str, DictError> {
        self.english_candidates(ipa)
            .first()
            .map(|w| w.as_str())
            .ok_or_else(|| DictError::IpaNotFound(ipa.to_string()))
    }

    /// Every English word pronounced exactly as `ipa`, in index order.
    pub fn english_candidates(&self, ipa: &str) -> &[String] {
        self.reverse
            .get(ipa.trim())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DictEntry])> {
        self.words.iter().map(|(w, e)| (w.as_str(), e.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn stats(&self) -> DictStats {
        DictStats {
            words: self.words.len(),
            pronunciations: self.words.iter().map(|(_, e)| e.len()).sum(),
            words_with_variants: self.words.iter().filter(|(_, e)| e.len() > 1).count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictStats {
    pub words: usize,
    pub pronunciations: usize,
    pub words_with_variants: usize,
}

impl DictStats {
    pub fn average_pronunciations(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.pronunciations as f64 / self.words as f64
        }
    }
}

/// JSON object read in document order.
struct OrderedWords(Vec<(String, Vec<DictEntry>)>);

impl<'de> Deserialize<'de> for OrderedWords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WordsVisitor;

        impl<'de> Visitor<'de> for WordsVisitor {
            type Value = OrderedWords;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping words to pronunciation lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut words = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((word, entries)) = map.next_entry::<String, Vec<DictEntry>>()? {
                    words.push((word, entries));
                }
                Ok(OrderedWords(words))
            }
        }

        deserializer.deserialize_map(WordsVisitor)
    }
}

struct WordsRef<'a>(&'a [(String, Vec<DictEntry>)]);

impl Serialize for WordsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(w, e)| (w, e)))
    }
}
