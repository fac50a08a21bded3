use std::fs;

use super::die;
use kfa_core::{phoneme, settings};

pub fn phonemes_export() {
    print!("{}", phoneme::default_toml());
}

pub fn phonemes_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(phoneme::parse_phonemes_toml(&content), "Error: {}");
    println!(
        "OK: {} ipa_to_kfa mappings, {} ipa_to_espeak mappings, {} stress marks, {} exotic symbols",
        tables.ipa_to_kfa.len(),
        tables.ipa_to_espeak.len(),
        tables.stress_marks.len(),
        tables.exotic.len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: speech.voice={}, speech.speed={}, dictionary.path={}",
        s.speech.voice, s.speech.speed, s.dictionary.path
    );
}
