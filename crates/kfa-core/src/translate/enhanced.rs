use serde::Serialize;
use tracing::debug_span;

use super::phrase::bracket;
use super::{ipa_to_kfa, Format, Translator};
use crate::dict::DictError;
use crate::words::{tokenize_english_text, Token};

/// One reading of a word in all three representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pronunciation {
    pub english: String,
    pub ipa: String,
    pub kfa: String,
    pub priority: u32,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTranslation {
    pub original_word: String,
    /// Sorted by ascending priority; never empty.
    pronunciations: Vec<Pronunciation>,
    selected_pronunciation: usize,
    pub has_multiple_pronunciations: bool,
}

impl WordTranslation {
    fn new(original_word: String, pronunciations: Vec<Pronunciation>) -> Self {
        Self {
            original_word,
            has_multiple_pronunciations: pronunciations.len() > 1,
            pronunciations,
            selected_pronunciation: 0,
        }
    }

    /// Make `index` the selected pronunciation. Out-of-range indices are
    /// rejected and leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.pronunciations.len() {
            self.selected_pronunciation = index;
            true
        } else {
            false
        }
    }

    pub fn pronunciations(&self) -> &[Pronunciation] {
        &self.pronunciations
    }

    pub fn selected_index(&self) -> usize {
        self.selected_pronunciation
    }

    pub fn selected(&self) -> &Pronunciation {
        self.pronunciations
            .get(self.selected_pronunciation)
            .unwrap_or(&self.pronunciations[0])
    }

    /// The selected pronunciation rendered in `format`.
    pub fn display(&self, format: Format) -> &str {
        let p = self.selected();
        match format {
            Format::English => &p.english,
            Format::Ipa => &p.ipa,
            Format::Kfa => &p.kfa,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnhancedTranslationResult {
    pub success: bool,
    pub words: Vec<WordTranslation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl EnhancedTranslationResult {
    /// Selected readings in `format`, joined with single spaces.
    pub fn render(&self, format: Format) -> String {
        self.words
            .iter()
            .map(|w| w.display(format))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Translator<'_> {
    /// English → every recorded pronunciation per word, each with its kfa
    /// spelling. Punctuation and whitespace are not represented. Unknown
    /// words get one placeholder reading whose fields are all `[Word]`.
    pub fn english_enhanced(&self, text: &str) -> EnhancedTranslationResult {
        let _span = debug_span!("translate_phrase", direction = "english_enhanced").entered();
        let mut words = Vec::new();
        let mut errors = Vec::new();

        for token in tokenize_english_text(text) {
            let Token::Word { value, original } = token else {
                continue;
            };

            let pronunciations = match self.dict.pronunciations(&value) {
                Some(entries) => {
                    let mut list: Vec<Pronunciation> = entries
                        .iter()
                        .map(|e| Pronunciation {
                            english: original.clone(),
                            ipa: e.ipa.clone(),
                            kfa: ipa_to_kfa(&e.ipa).result,
                            priority: e.priority,
                            region: e.region.clone(),
                        })
                        .collect();
                    list.sort_by_key(|p| p.priority);
                    list
                }
                None => {
                    errors.push(DictError::WordNotFound(original.clone()).to_string());
                    let marked = bracket(&original);
                    vec![Pronunciation {
                        english: marked.clone(),
                        ipa: marked.clone(),
                        kfa: marked,
                        priority: 1,
                        region: String::new(),
                    }]
                }
            };

            words.push(WordTranslation::new(original, pronunciations));
        }

        EnhancedTranslationResult {
            success: true,
            words,
            errors: (!errors.is_empty()).then_some(errors),
        }
    }
}
