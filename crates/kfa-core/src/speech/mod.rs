//! Hand-off to an eSpeak-compatible speech synthesizer.
//!
//! The engine does not produce audio. It renders kfa or IPA into eSpeak
//! phoneme mnemonics wrapped in `[[...]]` and pairs them with the
//! synthesizer options, defaulting from the `[speech]` settings.

use serde::Serialize;

use crate::phoneme::{tokenize_phonemes, PhonemeToken, SymbolTable};
use crate::settings::settings;
use crate::translate::kfa_to_ipa;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechOptions {
    pub amplitude: u32,
    pub pitch: u32,
    pub speed: u32,
    pub voice: String,
    #[serde(rename = "wordgap")]
    pub word_gap: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        let s = &settings().speech;
        Self {
            amplitude: s.amplitude,
            pitch: s.pitch,
            speed: s.speed,
            voice: s.voice.clone(),
            word_gap: s.word_gap,
            variant: s.variant.clone(),
        }
    }
}

/// Everything the synthesizer needs for one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechRequest {
    pub phonemes: String,
    pub options: SpeechOptions,
}

impl SpeechRequest {
    pub fn from_kfa(kfa: &str, options: SpeechOptions) -> Self {
        Self {
            phonemes: kfa_to_espeak(kfa),
            options,
        }
    }

    pub fn from_ipa(ipa: &str, options: SpeechOptions) -> Self {
        Self {
            phonemes: wrap(&ipa_to_espeak(ipa)),
            options,
        }
    }
}

/// IPA → eSpeak mnemonics, unwrapped. Unknown characters pass through.
pub fn ipa_to_espeak(ipa: &str) -> String {
    tokenize_phonemes(ipa, SymbolTable::ipa_to_espeak())
        .into_iter()
        .map(|token| match token {
            PhonemeToken::Symbol { target, .. } => target,
            other => other.source(),
        })
        .collect()
}

/// kfa → IPA → eSpeak, wrapped in the `[[...]]` phoneme-input brackets.
pub fn kfa_to_espeak(kfa: &str) -> String {
    wrap(&ipa_to_espeak(&kfa_to_ipa(kfa).result))
}

fn wrap(phonemes: &str) -> String {
    format!("[[{phonemes}]]")
}

/// Voices the synthesizer is expected to provide.
pub fn available_voices() -> &'static [String] {
    &settings().speech.voices
}
