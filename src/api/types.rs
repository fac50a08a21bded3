use kfa_core::speech::{SpeechOptions, SpeechRequest};
use kfa_core::translate::{
    EnhancedTranslationResult, Format, Pronunciation, ThreeWayResult, TranslateError,
    TranslationResult, WordTranslation,
};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KfaError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("dictionary not loaded")]
    NotLoaded,
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

impl From<TranslateError> for KfaError {
    fn from(e: TranslateError) -> Self {
        match e {
            TranslateError::NotLoaded => KfaError::NotLoaded,
            TranslateError::Load(inner) => KfaError::Io {
                msg: inner.to_string(),
            },
            other => KfaError::Internal {
                msg: other.to_string(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, uniffi::Record)]
pub struct KfaTranslationResult {
    pub success: bool,
    pub result: String,
    pub error: Option<String>,
}

impl From<TranslationResult> for KfaTranslationResult {
    fn from(r: TranslationResult) -> Self {
        Self {
            success: r.success,
            result: r.result,
            error: r.error,
        }
    }
}

#[derive(uniffi::Record)]
pub struct KfaThreeWay {
    pub english: KfaTranslationResult,
    pub ipa: KfaTranslationResult,
    pub kfa: KfaTranslationResult,
}

impl From<ThreeWayResult> for KfaThreeWay {
    fn from(r: ThreeWayResult) -> Self {
        Self {
            english: r.english.into(),
            ipa: r.ipa.into(),
            kfa: r.kfa.into(),
        }
    }
}

#[derive(Clone, uniffi::Record)]
pub struct KfaPronunciation {
    pub english: String,
    pub ipa: String,
    pub kfa: String,
    pub priority: u32,
    pub region: String,
}

impl From<Pronunciation> for KfaPronunciation {
    fn from(p: Pronunciation) -> Self {
        Self {
            english: p.english,
            ipa: p.ipa,
            kfa: p.kfa,
            priority: p.priority,
            region: p.region,
        }
    }
}

#[derive(Clone, uniffi::Record)]
pub struct KfaWordTranslation {
    pub original_word: String,
    pub pronunciations: Vec<KfaPronunciation>,
    pub selected_pronunciation: u32,
    pub has_multiple_pronunciations: bool,
}

impl From<WordTranslation> for KfaWordTranslation {
    fn from(w: WordTranslation) -> Self {
        Self {
            pronunciations: w.pronunciations().iter().cloned().map(Into::into).collect(),
            selected_pronunciation: w.selected_index() as u32,
            has_multiple_pronunciations: w.has_multiple_pronunciations,
            original_word: w.original_word,
        }
    }
}

#[derive(uniffi::Record)]
pub struct KfaEnhancedResult {
    pub success: bool,
    pub words: Vec<KfaWordTranslation>,
    pub errors: Option<Vec<String>>,
}

impl From<EnhancedTranslationResult> for KfaEnhancedResult {
    fn from(r: EnhancedTranslationResult) -> Self {
        Self {
            success: r.success,
            words: r.words.into_iter().map(Into::into).collect(),
            errors: r.errors,
        }
    }
}

#[derive(Clone, uniffi::Record)]
pub struct KfaSpeechOptions {
    pub amplitude: u32,
    pub pitch: u32,
    pub speed: u32,
    pub voice: String,
    pub word_gap: u32,
    pub variant: Option<String>,
}

impl From<SpeechOptions> for KfaSpeechOptions {
    fn from(o: SpeechOptions) -> Self {
        Self {
            amplitude: o.amplitude,
            pitch: o.pitch,
            speed: o.speed,
            voice: o.voice,
            word_gap: o.word_gap,
            variant: o.variant,
        }
    }
}

impl From<KfaSpeechOptions> for SpeechOptions {
    fn from(o: KfaSpeechOptions) -> Self {
        Self {
            amplitude: o.amplitude,
            pitch: o.pitch,
            speed: o.speed,
            voice: o.voice,
            word_gap: o.word_gap,
            variant: o.variant,
        }
    }
}

#[derive(uniffi::Record)]
pub struct KfaSpeechRequest {
    pub phonemes: String,
    pub options: KfaSpeechOptions,
}

impl From<SpeechRequest> for KfaSpeechRequest {
    fn from(r: SpeechRequest) -> Self {
        Self {
            phonemes: r.phonemes,
            options: r.options.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, uniffi::Enum)]
pub enum KfaFormat {
    English,
    Ipa,
    Kfa,
}

impl From<KfaFormat> for Format {
    fn from(f: KfaFormat) -> Self {
        match f {
            KfaFormat::English => Format::English,
            KfaFormat::Ipa => Format::Ipa,
            KfaFormat::Kfa => Format::Kfa,
        }
    }
}

#[derive(uniffi::Enum)]
pub enum KfaPhonemeLookup {
    None,
    Prefix,
    Exact { target: String },
    ExactAndPrefix { target: String },
}

#[derive(uniffi::Record)]
pub struct KfaPhoneme {
    pub ipa: String,
    pub kfa: String,
}
