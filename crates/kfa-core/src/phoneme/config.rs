use serde::Deserialize;

#[derive(Deserialize)]
struct PhonemeConfig {
    ipa_to_kfa: Vec<(String, String)>,
    ipa_to_espeak: Vec<(String, String)>,
    #[serde(default)]
    stress_marks: Vec<String>,
    #[serde(default)]
    exotic: String,
}

/// Validated contents of a phoneme TOML file, in file order.
#[derive(Debug, Clone)]
pub struct PhonemeTables {
    pub ipa_to_kfa: Vec<(String, String)>,
    pub ipa_to_espeak: Vec<(String, String)>,
    pub stress_marks: Vec<char>,
    pub exotic: Vec<char>,
}

#[derive(Debug, thiserror::Error)]
pub enum PhonemeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("empty key in [{0}]")]
    EmptyKey(&'static str),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("kfa symbol must be ASCII letters only: {0}")]
    NonLetterKfa(String),
    #[error("stress mark must be a single character: {0}")]
    InvalidStressMark(String),
    #[error("phoneme tables already initialized")]
    AlreadyInitialized,
}

/// Parse and validate phoneme TOML text.
pub fn parse_phonemes_toml(toml_str: &str) -> Result<PhonemeTables, PhonemeConfigError> {
    let config: PhonemeConfig =
        toml::from_str(toml_str).map_err(|e| PhonemeConfigError::Parse(e.to_string()))?;

    check_pairs("ipa_to_kfa", &config.ipa_to_kfa)?;
    check_pairs("ipa_to_espeak", &config.ipa_to_espeak)?;

    if let Some((_, kfa)) = config
        .ipa_to_kfa
        .iter()
        .find(|(_, kfa)| !kfa.chars().all(|c| c.is_ascii_alphabetic()))
    {
        return Err(PhonemeConfigError::NonLetterKfa(kfa.clone()));
    }

    let mut stress_marks = Vec::with_capacity(config.stress_marks.len());
    for mark in &config.stress_marks {
        let mut chars = mark.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => stress_marks.push(c),
            _ => return Err(PhonemeConfigError::InvalidStressMark(mark.clone())),
        }
    }

    let mut exotic: Vec<char> = Vec::new();
    for c in config.exotic.chars().filter(|c| !c.is_whitespace()) {
        if !exotic.contains(&c) {
            exotic.push(c);
        }
    }

    Ok(PhonemeTables {
        ipa_to_kfa: config.ipa_to_kfa,
        ipa_to_espeak: config.ipa_to_espeak,
        stress_marks,
        exotic,
    })
}

fn check_pairs(table: &'static str, pairs: &[(String, String)]) -> Result<(), PhonemeConfigError> {
    if pairs.is_empty() {
        return Err(PhonemeConfigError::Empty(table));
    }
    for (key, value) in pairs {
        if key.is_empty() {
            return Err(PhonemeConfigError::EmptyKey(table));
        }
        if value.is_empty() {
            return Err(PhonemeConfigError::EmptyValue(key.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
ipa_to_kfa = [["əʊ", "uO"], ["ə", "u"]]
ipa_to_espeak = [["ə", "@"]]
stress_marks = ["ˈ"]
exotic = "ɾʔ ɾ"
"#;

    #[test]
    fn parse_minimal_toml() {
        let tables = parse_phonemes_toml(MINIMAL).unwrap();
        assert_eq!(tables.ipa_to_kfa.len(), 2);
        assert_eq!(tables.ipa_to_kfa[0], ("əʊ".to_string(), "uO".to_string()));
        assert_eq!(tables.stress_marks, vec!['ˈ']);
        assert_eq!(tables.exotic, vec!['ɾ', 'ʔ']);
    }

    #[test]
    fn parse_default_toml() {
        let tables = parse_phonemes_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(tables.ipa_to_kfa.len() > 60);
        assert!(tables.exotic.len() > 40);
        assert_eq!(tables.stress_marks, vec!['ˈ', 'ˌ']);
    }

    #[test]
    fn default_exotic_symbols_are_not_table_keys() {
        let tables = parse_phonemes_toml(super::super::table::DEFAULT_TOML).unwrap();
        for c in &tables.exotic {
            let s = c.to_string();
            assert!(
                tables.ipa_to_kfa.iter().all(|(ipa, _)| *ipa != s),
                "{c} is both exotic and translatable"
            );
        }
    }

    #[test]
    fn error_empty_table() {
        let toml = "ipa_to_kfa = []\nipa_to_espeak = [[\"a\", \"a\"]]\n";
        let err = parse_phonemes_toml(toml).unwrap_err();
        assert!(matches!(err, PhonemeConfigError::Empty("ipa_to_kfa")));
    }

    #[test]
    fn error_empty_value() {
        let toml = "ipa_to_kfa = [[\"ə\", \"\"]]\nipa_to_espeak = [[\"a\", \"a\"]]\n";
        let err = parse_phonemes_toml(toml).unwrap_err();
        assert!(matches!(err, PhonemeConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_non_letter_kfa() {
        let toml = "ipa_to_kfa = [[\"ə\", \"u:\"]]\nipa_to_espeak = [[\"a\", \"a\"]]\n";
        let err = parse_phonemes_toml(toml).unwrap_err();
        assert!(matches!(err, PhonemeConfigError::NonLetterKfa(_)));
    }

    #[test]
    fn error_multichar_stress_mark() {
        let toml = r#"
ipa_to_kfa = [["ə", "u"]]
ipa_to_espeak = [["ə", "@"]]
stress_marks = ["ˈˌ"]
"#;
        let err = parse_phonemes_toml(toml).unwrap_err();
        assert!(matches!(err, PhonemeConfigError::InvalidStressMark(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_phonemes_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, PhonemeConfigError::Parse(_)));
    }
}
