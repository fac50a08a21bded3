//! UniFFI export layer: type-safe Swift/Kotlin bindings for the kfa engine.
//!
//! Each public type here maps to a generated foreign class, struct, or enum.

mod translator;
mod types;

pub use translator::KfaTranslator;
pub use types::{
    KfaEnhancedResult, KfaError, KfaFormat, KfaPhoneme, KfaPhonemeLookup, KfaPronunciation,
    KfaSpeechOptions, KfaSpeechRequest, KfaThreeWay, KfaTranslationResult, KfaWordTranslation,
};

use std::path::Path;

use kfa_core::phoneme::{self, SymbolTable, TrieLookupResult};
use kfa_core::speech::{self, SpeechOptions};
use kfa_core::translate;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn ipa_to_kfa(text: String) -> KfaTranslationResult {
    translate::ipa_to_kfa(&text).into()
}

#[uniffi::export]
fn kfa_to_ipa(text: String) -> KfaTranslationResult {
    translate::kfa_to_ipa(&text).into()
}

#[uniffi::export]
fn kfa_to_espeak(kfa: String) -> String {
    speech::kfa_to_espeak(&kfa)
}

/// `None` when `text` is acceptable kfa input, otherwise the reason.
#[uniffi::export]
fn validate_kfa(text: String) -> Option<String> {
    translate::validate_kfa_text(&text).err().map(|e| e.to_string())
}

/// Prefix/exact state of `ipa` in the IPA → kfa table, for input hinting.
#[uniffi::export]
fn phoneme_lookup(ipa: String) -> KfaPhonemeLookup {
    match SymbolTable::ipa_to_kfa().lookup(&ipa) {
        TrieLookupResult::None => KfaPhonemeLookup::None,
        TrieLookupResult::Prefix => KfaPhonemeLookup::Prefix,
        TrieLookupResult::Exact(target) => KfaPhonemeLookup::Exact { target },
        TrieLookupResult::ExactAndPrefix(target) => KfaPhonemeLookup::ExactAndPrefix { target },
    }
}

#[uniffi::export]
fn supported_phonemes() -> Vec<KfaPhoneme> {
    phoneme::supported_phonemes()
        .iter()
        .map(|(ipa, kfa)| KfaPhoneme {
            ipa: ipa.clone(),
            kfa: kfa.clone(),
        })
        .collect()
}

#[uniffi::export]
fn default_speech_options() -> KfaSpeechOptions {
    SpeechOptions::default().into()
}

#[uniffi::export]
fn available_voices() -> Vec<String> {
    speech::available_voices().to_vec()
}

#[uniffi::export]
fn phonemes_load_config(path: String) -> Result<(), KfaError> {
    let content = std::fs::read_to_string(&path).map_err(|e| KfaError::Io {
        msg: format!("{path}: {e}"),
    })?;
    phoneme::init_custom(content).map_err(|e| KfaError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), KfaError> {
    let content = std::fs::read_to_string(&path).map_err(|e| KfaError::Io {
        msg: format!("{path}: {e}"),
    })?;
    kfa_core::settings::init_custom(content)
        .map_err(|e| KfaError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn phonemes_default_config() -> String {
    phoneme::default_toml().to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    kfa_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
