use super::die;
use kfa_core::phoneme::supported_phonemes;
use kfa_core::speech::{SpeechOptions, SpeechRequest};
use kfa_core::translate::{
    ipa_to_kfa, kfa_to_ipa, validate_kfa_text, Format, TranslationResult, TranslationService,
};

fn print_result(label: &str, result: &TranslationResult) {
    let mark = if result.success { "ok" } else { "FAILED" };
    println!("{label:<8} [{mark}] {}", result.result);
    if let Some(err) = &result.error {
        println!("{:<8}   {err}", "");
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!(
        "{}",
        die!(serde_json::to_string_pretty(value), "Error serializing: {}")
    );
}

fn load_service(dict: &str) -> TranslationService {
    let service = TranslationService::from_location(dict);
    die!(service.initialize(), "Error loading {dict}: {}");
    service
}

pub fn ipa_to_kfa_cmd(text: &str, json: bool) {
    let result = ipa_to_kfa(text);
    if json {
        print_json(&result);
    } else {
        print_result("kfa", &result);
    }
}

pub fn kfa_to_ipa_cmd(text: &str, json: bool) {
    if let Err(e) = validate_kfa_text(text) {
        eprintln!("Warning: {e}");
    }
    let result = kfa_to_ipa(text);
    if json {
        print_json(&result);
    } else {
        print_result("ipa", &result);
    }
}

pub fn translate_cmd(dict: &str, from: Format, text: &str, json: bool) {
    let service = load_service(dict);
    let results = die!(service.translate_text(text, from), "Error: {}");
    if json {
        print_json(&results);
        return;
    }
    print_result("english", &results.english);
    print_result("ipa", &results.ipa);
    print_result("kfa", &results.kfa);
}

pub fn enhanced_cmd(dict: &str, text: &str, json: bool) {
    let service = load_service(dict);
    let result = die!(service.english_enhanced(text), "Error: {}");
    if json {
        print_json(&result);
        return;
    }

    for word in &result.words {
        println!("{}", word.original_word);
        for (i, p) in word.pronunciations().iter().enumerate() {
            let mark = if i == word.selected_index() { '*' } else { ' ' };
            let region = if p.region.is_empty() {
                String::new()
            } else {
                format!("  ({})", p.region)
            };
            println!("  {mark} [{}] {:<20} {}{region}", p.priority, p.ipa, p.kfa);
        }
    }
    println!();
    println!("ipa: {}", result.render(Format::Ipa));
    println!("kfa: {}", result.render(Format::Kfa));
    for err in result.errors.iter().flatten() {
        eprintln!("{err}");
    }
}

pub fn espeak_cmd(kfa: &str, voice: Option<&str>, speed: Option<u32>, json: bool) {
    let mut options = SpeechOptions::default();
    if let Some(voice) = voice {
        options.voice = voice.to_string();
    }
    if let Some(speed) = speed {
        options.speed = speed;
    }
    let request = SpeechRequest::from_kfa(kfa, options);
    if json {
        print_json(&request);
    } else {
        println!("{}", request.phonemes);
    }
}

pub fn phonemes_cmd() {
    for (ipa, kfa) in supported_phonemes() {
        println!("{ipa}\t{kfa}");
    }
}
