use tracing::debug;

use super::{TranslateError, TranslationResult};
use crate::phoneme::{is_exotic, is_stress_mark, tokenize_phonemes, PhonemeToken, SymbolTable};

/// IPA → kfa by longest-match over the symbol table.
///
/// Stress marks that are not part of a longer symbol are dropped. Rare IPA
/// letters with no kfa spelling are copied through and make the call fail;
/// anything else unmatched (digits, Latin letters) is copied silently.
pub fn ipa_to_kfa(text: &str) -> TranslationResult {
    let table = SymbolTable::ipa_to_kfa();
    let mut out = String::with_capacity(text.len());
    let mut unknown: Vec<String> = Vec::new();

    for token in tokenize_phonemes(text, table) {
        match token {
            PhonemeToken::Symbol { target, .. } => out.push_str(target),
            PhonemeToken::Separator(s) | PhonemeToken::Marker(s) => out.push_str(s),
            PhonemeToken::Unmatched(s) => {
                let Some(c) = s.chars().next() else { continue };
                if is_stress_mark(c) {
                    continue;
                }
                if is_exotic(c) && !unknown.iter().any(|u| u == s) {
                    unknown.push(s.to_string());
                }
                out.push_str(s);
            }
        }
    }

    if unknown.is_empty() {
        TranslationResult::ok(out)
    } else {
        debug!(symbols = ?unknown, "unknown IPA symbols");
        TranslationResult::failed(out, TranslateError::UnknownPhonemeSymbol(unknown).to_string())
    }
}

/// kfa → IPA using the inverted table. Never fails: unmatched input is
/// copied through.
pub fn kfa_to_ipa(text: &str) -> TranslationResult {
    let table = SymbolTable::kfa_to_ipa();
    let out: String = tokenize_phonemes(text, table)
        .into_iter()
        .map(|token| match token {
            PhonemeToken::Symbol { target, .. } => target,
            other => other.source(),
        })
        .collect();
    TranslationResult::ok(out)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KfaValidationError {
    #[error("kfa text is empty")]
    Empty,
    #[error("invalid character in kfa text: {0:?}")]
    InvalidCharacter(char),
}

/// Check that `text` is plausible kfa input: ASCII letters, digits,
/// whitespace and ASCII punctuation only.
pub fn validate_kfa_text(text: &str) -> Result<(), KfaValidationError> {
    if text.is_empty() {
        return Err(KfaValidationError::Empty);
    }
    match text
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || c.is_whitespace() || c.is_ascii_punctuation()))
    {
        Some(c) => Err(KfaValidationError::InvalidCharacter(c)),
        None => Ok(()),
    }
}
