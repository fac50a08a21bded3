//! Translation between English, IPA and kfa.
//!
//! IPA ↔ kfa needs only the symbol tables ([`ipa_to_kfa`], [`kfa_to_ipa`]).
//! Every direction that touches English goes through a [`Translator`], which
//! borrows a loaded [`PronunciationDictionary`]. [`TranslationService`] owns
//! the load-once dictionary and hands out translators on demand.
//!
//! Individual word and symbol failures never abort a pass: they are marked
//! in the output (`[word]`) and reported through [`TranslationResult::error`].

mod enhanced;
mod loader;
mod phoneme;
mod phrase;

pub use enhanced::{EnhancedTranslationResult, Pronunciation, WordTranslation};
pub use loader::{DictionaryLoader, TranslationService};
pub use phoneme::{ipa_to_kfa, kfa_to_ipa, validate_kfa_text, KfaValidationError};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::dict::{DictError, PronunciationDictionary};

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("dictionary not loaded")]
    NotLoaded,

    #[error("dictionary load failed: {0}")]
    Load(#[from] DictError),

    #[error("Unknown IPA symbols found: {}", .0.join(", "))]
    UnknownPhonemeSymbol(Vec<String>),
}

/// Outcome of one translation call. `result` is always populated, even when
/// `success` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub success: bool,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationResult {
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: result.into(),
            error: None,
        }
    }

    pub fn failed(result: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: result.into(),
            error: Some(error.into()),
        }
    }

    /// Successful result that still carries per-word diagnostics, joined
    /// with `"; "`.
    pub(crate) fn with_diagnostics(result: String, errors: Vec<String>) -> Self {
        Self {
            success: true,
            result,
            error: (!errors.is_empty()).then(|| errors.join("; ")),
        }
    }

    /// Chain `self` into a second stage: success only if both succeeded,
    /// output from the second, first stage's error preferred.
    fn then(self, next: impl FnOnce(&str) -> TranslationResult) -> TranslationResult {
        let second = next(&self.result);
        TranslationResult {
            success: self.success && second.success,
            result: second.result,
            error: self.error.or(second.error),
        }
    }

    fn not_translated() -> Self {
        Self {
            success: false,
            result: String::new(),
            error: Some("Not translated".to_string()),
        }
    }
}

/// The three text representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    English,
    Ipa,
    Kfa,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::English => "english",
            Format::Ipa => "ipa",
            Format::Kfa => "kfa",
        })
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Format::English),
            "ipa" => Ok(Format::Ipa),
            "kfa" => Ok(Format::Kfa),
            other => Err(format!("unknown format: {other} (expected english, ipa or kfa)")),
        }
    }
}

/// Text in all three representations, one of which is the caller's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreeWayResult {
    pub english: TranslationResult,
    pub ipa: TranslationResult,
    pub kfa: TranslationResult,
}

/// Dictionary-backed translation in every direction.
#[derive(Clone, Copy)]
pub struct Translator<'d> {
    dict: &'d PronunciationDictionary,
}

impl<'d> Translator<'d> {
    pub fn new(dict: &'d PronunciationDictionary) -> Self {
        Self { dict }
    }

    pub fn dictionary(&self) -> &'d PronunciationDictionary {
        self.dict
    }

    pub fn ipa_to_kfa(&self, text: &str) -> TranslationResult {
        ipa_to_kfa(text)
    }

    pub fn kfa_to_ipa(&self, text: &str) -> TranslationResult {
        kfa_to_ipa(text)
    }

    pub fn english_to_kfa(&self, text: &str) -> TranslationResult {
        self.english_to_ipa(text).then(ipa_to_kfa)
    }

    pub fn kfa_to_english(&self, text: &str) -> TranslationResult {
        kfa_to_ipa(text).then(|ipa| self.ipa_to_english(ipa))
    }

    /// Translate `text` from `from` into the other two representations.
    pub fn translate_text(&self, text: &str, from: Format) -> ThreeWayResult {
        let mut out = ThreeWayResult {
            english: TranslationResult::not_translated(),
            ipa: TranslationResult::not_translated(),
            kfa: TranslationResult::not_translated(),
        };
        match from {
            Format::English => {
                out.english = TranslationResult::ok(text);
                out.ipa = self.english_to_ipa(text);
                out.kfa = self.english_to_kfa(text);
            }
            Format::Ipa => {
                out.ipa = TranslationResult::ok(text);
                out.english = self.ipa_to_english(text);
                out.kfa = self.ipa_to_kfa(text);
            }
            Format::Kfa => {
                out.kfa = TranslationResult::ok(text);
                out.ipa = self.kfa_to_ipa(text);
                out.english = self.kfa_to_english(text);
            }
        }
        out
    }
}
