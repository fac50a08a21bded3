use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::{
    ipa_to_kfa, kfa_to_ipa, EnhancedTranslationResult, Format, ThreeWayResult, TranslateError,
    TranslationResult, Translator,
};
use crate::dict::source::{from_location, DictSource};
use crate::dict::PronunciationDictionary;
use crate::settings::settings;

/// Loads the pronunciation dictionary at most once.
///
/// Callers that arrive while a load is in flight wait for it instead of
/// fetching again. A failed load leaves the loader empty so the next call
/// retries.
pub struct DictionaryLoader {
    source: Box<dyn DictSource>,
    dict: Mutex<Option<Arc<PronunciationDictionary>>>,
}

impl DictionaryLoader {
    pub fn new(source: Box<dyn DictSource>) -> Self {
        Self {
            source,
            dict: Mutex::new(None),
        }
    }

    /// Return the dictionary, fetching and parsing it on first use.
    pub fn load(&self) -> Result<Arc<PronunciationDictionary>, TranslateError> {
        let mut slot = self.lock();
        if let Some(dict) = slot.as_ref() {
            return Ok(Arc::clone(dict));
        }

        let location = self.source.describe();
        let dict = self
            .source
            .fetch()
            .and_then(|json| PronunciationDictionary::from_json(&json))
            .map_err(|e| {
                warn!(%location, error = %e, "dictionary load failed");
                TranslateError::Load(e)
            })?;
        debug!(%location, words = dict.len(), "dictionary loaded");

        let dict = Arc::new(dict);
        *slot = Some(Arc::clone(&dict));
        Ok(dict)
    }

    /// The dictionary if a load has completed, without triggering one.
    pub fn get(&self) -> Result<Arc<PronunciationDictionary>, TranslateError> {
        self.lock().clone().ok_or(TranslateError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<PronunciationDictionary>>> {
        // The slot is only written after a complete load.
        self.dict.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// All six translation directions behind a shared dictionary loader.
///
/// IPA ↔ kfa work without a dictionary. Directions involving English load
/// it on first use; a failed load surfaces as [`TranslateError::Load`] and
/// is retried by the next call.
pub struct TranslationService {
    loader: DictionaryLoader,
}

impl TranslationService {
    pub fn new(source: Box<dyn DictSource>) -> Self {
        Self {
            loader: DictionaryLoader::new(source),
        }
    }

    /// File path or `http(s)://` URL.
    pub fn from_location(location: &str) -> Self {
        Self::new(from_location(location))
    }

    /// Location from the `[dictionary]` settings section.
    pub fn from_settings() -> Self {
        Self::from_location(settings().dictionary.location())
    }

    /// Load the dictionary. Idempotent once it has succeeded; retries after
    /// a failure.
    pub fn initialize(&self) -> Result<(), TranslateError> {
        self.loader.load().map(|_| ())
    }

    pub fn is_loaded(&self) -> bool {
        self.loader.is_loaded()
    }

    pub fn loader(&self) -> &DictionaryLoader {
        &self.loader
    }

    /// Run `f` against the dictionary, loading it first if needed.
    pub fn with_translator<R>(&self, f: impl FnOnce(Translator<'_>) -> R) -> Result<R, TranslateError> {
        let dict = self.loader.load()?;
        Ok(f(Translator::new(&dict)))
    }

    pub fn english_to_ipa(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        self.with_translator(|t| t.english_to_ipa(text))
    }

    pub fn english_to_kfa(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        self.with_translator(|t| t.english_to_kfa(text))
    }

    pub fn ipa_to_english(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        self.with_translator(|t| t.ipa_to_english(text))
    }

    pub fn kfa_to_english(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        self.with_translator(|t| t.kfa_to_english(text))
    }

    pub fn ipa_to_kfa(&self, text: &str) -> TranslationResult {
        ipa_to_kfa(text)
    }

    pub fn kfa_to_ipa(&self, text: &str) -> TranslationResult {
        kfa_to_ipa(text)
    }

    pub fn english_enhanced(&self, text: &str) -> Result<EnhancedTranslationResult, TranslateError> {
        self.with_translator(|t| t.english_enhanced(text))
    }

    pub fn translate_text(&self, text: &str, from: Format) -> Result<ThreeWayResult, TranslateError> {
        self.with_translator(|t| t.translate_text(text, from))
    }
}
