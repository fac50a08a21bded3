//! Global settings loaded from TOML, following the same OnceLock pattern as the
//! phoneme tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub speech: SpeechSettings,
    pub dictionary: DictionarySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub amplitude: u32,
    pub pitch: u32,
    /// Words per minute.
    pub speed: u32,
    pub voice: String,
    /// Extra pause between words, in units of 10ms at the default speed.
    pub word_gap: u32,
    #[serde(default)]
    pub variant: Option<String>,
    pub voices: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub path: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl DictionarySettings {
    /// The configured location: the file path if it exists, else the URL if
    /// one is set, else the path (so the load error names it).
    pub fn location(&self) -> &str {
        match &self.url {
            Some(url) if !std::path::Path::new(&self.path).exists() => url,
            _ => &self.path,
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_range {
        ($field:ident, $min:expr, $max:expr) => {
            if !($min..=$max).contains(&s.speech.$field) {
                return Err(SettingsError::InvalidValue {
                    field: concat!("speech.", stringify!($field)).to_string(),
                    reason: format!("must be between {} and {}", $min, $max),
                });
            }
        };
    }

    check_range!(amplitude, 0, 200);
    check_range!(pitch, 0, 99);
    check_range!(speed, 80, 450);

    if s.speech.voices.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "speech.voices".to_string(),
            reason: "must list at least one voice".to_string(),
        });
    }
    if !s.speech.voices.contains(&s.speech.voice) {
        return Err(SettingsError::InvalidValue {
            field: "speech.voice".to_string(),
            reason: format!("\"{}\" is not in speech.voices", s.speech.voice),
        });
    }
    if s.dictionary.path.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "dictionary.path".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}
