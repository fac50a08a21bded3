use std::sync::Arc;

use kfa_core::speech::SpeechRequest;
use kfa_core::translate::TranslationService;

use super::{
    KfaEnhancedResult, KfaError, KfaFormat, KfaSpeechOptions, KfaSpeechRequest, KfaThreeWay,
    KfaTranslationResult,
};

/// Translation in all directions over one dictionary resource.
#[derive(uniffi::Object)]
pub struct KfaTranslator {
    service: TranslationService,
}

#[uniffi::export]
impl KfaTranslator {
    /// `location` is a file path or an `http(s)://` URL. Nothing is read
    /// until `initialize` or the first English translation.
    #[uniffi::constructor]
    fn new(location: String) -> Arc<Self> {
        Arc::new(Self {
            service: TranslationService::from_location(&location),
        })
    }

    /// Uses the `[dictionary]` location from settings.
    #[uniffi::constructor]
    fn from_settings() -> Arc<Self> {
        Arc::new(Self {
            service: TranslationService::from_settings(),
        })
    }

    fn initialize(&self) -> Result<(), KfaError> {
        Ok(self.service.initialize()?)
    }

    fn is_loaded(&self) -> bool {
        self.service.is_loaded()
    }

    fn english_to_ipa(&self, text: String) -> Result<KfaTranslationResult, KfaError> {
        Ok(self.service.english_to_ipa(&text)?.into())
    }

    fn english_to_kfa(&self, text: String) -> Result<KfaTranslationResult, KfaError> {
        Ok(self.service.english_to_kfa(&text)?.into())
    }

    fn ipa_to_english(&self, text: String) -> Result<KfaTranslationResult, KfaError> {
        Ok(self.service.ipa_to_english(&text)?.into())
    }

    fn kfa_to_english(&self, text: String) -> Result<KfaTranslationResult, KfaError> {
        Ok(self.service.kfa_to_english(&text)?.into())
    }

    fn ipa_to_kfa(&self, text: String) -> KfaTranslationResult {
        self.service.ipa_to_kfa(&text).into()
    }

    fn kfa_to_ipa(&self, text: String) -> KfaTranslationResult {
        self.service.kfa_to_ipa(&text).into()
    }

    fn translate_text(&self, text: String, from: KfaFormat) -> Result<KfaThreeWay, KfaError> {
        Ok(self.service.translate_text(&text, from.into())?.into())
    }

    fn translate_english_enhanced(&self, text: String) -> Result<KfaEnhancedResult, KfaError> {
        Ok(self.service.english_enhanced(&text)?.into())
    }

    /// Preferred IPA for one word. `NotLoaded` before the dictionary has
    /// been loaded.
    fn lookup_ipa(&self, word: String) -> Result<Option<String>, KfaError> {
        let dict = self.service.loader().get()?;
        Ok(dict.lookup_ipa(&word).ok().map(|e| e.ipa.clone()))
    }

    /// Every English word pronounced exactly as `ipa`, first-indexed first.
    fn lookup_english(&self, ipa: String) -> Result<Vec<String>, KfaError> {
        let dict = self.service.loader().get()?;
        Ok(dict.english_candidates(&ipa).to_vec())
    }

    /// Speech request for kfa text. `options` defaults from settings.
    fn speech_request(&self, kfa: String, options: Option<KfaSpeechOptions>) -> KfaSpeechRequest {
        let options = options.map(Into::into).unwrap_or_default();
        SpeechRequest::from_kfa(&kfa, options).into()
    }
}
