use super::*;

const SAMPLE: &str = r#"{
    "read": [
        {"ipa": "ɹɛd", "priority": 2, "region": ""},
        {"ipa": "ɹiːd", "priority": 1, "region": ""}
    ],
    "reed": [{"ipa": "ɹiːd", "priority": 1, "region": ""}],
    "hello": [
        {"ipa": "həˈloʊ", "priority": 1, "region": "us"},
        {"ipa": "hɛˈləʊ", "priority": 1, "region": "uk"}
    ],
    "cat": [{"ipa": "kæt", "priority": 1}]
}"#;

fn sample() -> PronunciationDictionary {
    PronunciationDictionary::from_json(SAMPLE).unwrap()
}

#[test]
fn lowest_priority_wins_regardless_of_order() {
    let dict = sample();
    assert_eq!(dict.lookup_ipa("read").unwrap().ipa, "ɹiːd");
}

#[test]
fn priority_tie_keeps_first_stored() {
    let dict = sample();
    let entry = dict.lookup_ipa("hello").unwrap();
    assert_eq!(entry.ipa, "həˈloʊ");
    assert_eq!(entry.region, "us");
}

#[test]
fn lookup_trims_and_lowercases() {
    let dict = sample();
    assert_eq!(dict.lookup_ipa("  CAT ").unwrap().ipa, "kæt");
}

#[test]
fn missing_region_defaults_to_empty() {
    let dict = sample();
    assert_eq!(dict.lookup_ipa("cat").unwrap().region, "");
}

#[test]
fn unknown_word_error_message() {
    let dict = sample();
    let err = dict.lookup_ipa("dog").unwrap_err();
    assert_eq!(err.to_string(), "Word \"dog\" not found in dictionary");
}

#[test]
fn reverse_index_first_word_wins() {
    let dict = sample();
    assert_eq!(dict.lookup_english("ɹiːd").unwrap(), "read");
    assert_eq!(dict.english_candidates("ɹiːd"), ["read", "reed"]);
}

#[test]
fn reverse_index_covers_every_variant() {
    let dict = sample();
    assert_eq!(dict.lookup_english("ɹɛd").unwrap(), "read");
    assert_eq!(dict.lookup_english("hɛˈləʊ").unwrap(), "hello");
    assert_eq!(dict.lookup_english(" kæt ").unwrap(), "cat");
}

#[test]
fn unknown_ipa_error_message() {
    let dict = sample();
    let err = dict.lookup_english("zzz").unwrap_err();
    assert_eq!(err.to_string(), "IPA \"zzz\" not found in dictionary");
}

#[test]
fn reverse_index_dedupes_repeated_word() {
    let dict = PronunciationDictionary::from_entries([(
        "a".to_string(),
        vec![DictEntry::new("ə", 1), DictEntry::new("ə", 2)],
    )]);
    assert_eq!(dict.english_candidates("ə"), ["a"]);
}

#[test]
fn empty_entry_list_is_not_found() {
    let dict = PronunciationDictionary::from_json(r#"{"ghost": []}"#).unwrap();
    assert!(dict.pronunciations("ghost").is_none());
    assert!(matches!(
        dict.lookup_ipa("ghost"),
        Err(DictError::WordNotFound(_))
    ));
}

#[test]
fn zero_priority_rejected() {
    let result = PronunciationDictionary::from_json(r#"{"x": [{"ipa": "ɛks", "priority": 0}]}"#);
    assert!(matches!(result, Err(DictError::Parse(_))));
}

#[test]
fn malformed_json_rejected() {
    assert!(matches!(
        PronunciationDictionary::from_json("[1, 2, 3]"),
        Err(DictError::Parse(_))
    ));
    assert!(matches!(
        PronunciationDictionary::from_json(r#"{"x": [{"priority": 1}]}"#),
        Err(DictError::Parse(_))
    ));
}

#[test]
fn json_preserves_word_order() {
    let dict = sample();
    let words: Vec<&str> = dict.iter().map(|(w, _)| w).collect();
    assert_eq!(words, ["read", "reed", "hello", "cat"]);

    let reparsed = PronunciationDictionary::from_json(&dict.to_json().unwrap()).unwrap();
    let again: Vec<&str> = reparsed.iter().map(|(w, _)| w).collect();
    assert_eq!(again, words);
    assert_eq!(reparsed.lookup_ipa("read").unwrap().ipa, "ɹiːd");
}

#[test]
fn duplicate_words_merge_into_first_slot() {
    let dict = PronunciationDictionary::from_entries([
        ("a".to_string(), vec![DictEntry::new("ə", 1)]),
        ("b".to_string(), vec![DictEntry::new("biː", 1)]),
        ("a".to_string(), vec![DictEntry::new("eɪ", 2)]),
    ]);
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.pronunciations("a").unwrap().len(), 2);
}

#[test]
fn stats_counts() {
    let stats = sample().stats();
    assert_eq!(
        stats,
        DictStats {
            words: 4,
            pronunciations: 6,
            words_with_variants: 2,
        }
    );
    assert!((stats.average_pronunciations() - 1.5).abs() < f64::EPSILON);
}

#[test]
fn empty_dictionary() {
    let dict = PronunciationDictionary::from_json("{}").unwrap();
    assert!(dict.is_empty());
    assert_eq!(dict.stats().average_pronunciations(), 0.0);
}
