use std::fs;

use super::die;
use kfa_core::dict::source::{parse_ipadict_txt, DictSource, HttpSource};
use kfa_core::dict::PronunciationDictionary;
use kfa_core::translate::ipa_to_kfa;

/// Read a JSON dictionary from a file, exiting on failure.
pub(crate) fn open_dict(dict_file: &str) -> PronunciationDictionary {
    let json = die!(
        fs::read_to_string(dict_file),
        "Error reading {dict_file}: {}"
    );
    die!(
        PronunciationDictionary::from_json(&json),
        "Error parsing dictionary: {}"
    )
}

pub fn convert(input_txt: &str, output_file: &str) {
    let text = die!(
        fs::read_to_string(input_txt),
        "Error reading {input_txt}: {}"
    );

    let dict = parse_ipadict_txt(&text);
    let stats = dict.stats();
    eprintln!(
        "Parsed {} words ({} pronunciations, {} with variants)",
        stats.words, stats.pronunciations, stats.words_with_variants
    );

    let json = die!(dict.to_json(), "Error serializing dictionary: {}");
    die!(
        fs::write(output_file, json),
        "Error writing {output_file}: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} MB)",
        file_size as f64 / 1_048_576.0
    );
}

pub fn info(dict_file: &str) {
    let dict = open_dict(dict_file);
    let stats = dict.stats();
    let file_size = fs::metadata(dict_file).map(|m| m.len()).unwrap_or(0);

    println!("Dictionary:      {dict_file}");
    println!("File size:       {:.1} MB", file_size as f64 / 1_048_576.0);
    println!("Words:           {}", stats.words);
    println!("Pronunciations:  {}", stats.pronunciations);
    println!("With variants:   {}", stats.words_with_variants);
    println!("Avg per word:    {:.2}", stats.average_pronunciations());

    let samples = ["hello", "world", "read", "the"];
    println!();
    println!("Sample lookups:");
    for word in &samples {
        match dict.lookup_ipa(word) {
            Ok(entry) => println!("  {word} → {}", entry.ipa),
            Err(_) => println!("  {word} → (not found)"),
        }
    }
}

pub fn lookup(dict_file: &str, word: &str) {
    let dict = open_dict(dict_file);
    let Some(entries) = dict.pronunciations(word) else {
        println!("{word}: not found");
        return;
    };

    let mut sorted: Vec<_> = entries.iter().collect();
    sorted.sort_by_key(|e| e.priority);
    println!("{word}: {} pronunciation(s)", sorted.len());
    for e in sorted {
        let region = if e.region.is_empty() { "-" } else { e.region.as_str() };
        println!(
            "  [{}] {}  kfa={}  region={region}",
            e.priority,
            e.ipa,
            ipa_to_kfa(&e.ipa).result
        );
    }

    if let Some(first) = entries.first() {
        let homophones = dict.english_candidates(&first.ipa);
        if homophones.len() > 1 {
            println!("  homophones: {}", homophones.join(", "));
        }
    }
}

pub fn fetch(url: &str, output_file: &str) {
    let source = HttpSource::new(url);
    eprintln!("Downloading {}...", source.describe());
    let json = die!(source.fetch(), "Error fetching dictionary: {}");
    let dict = die!(
        PronunciationDictionary::from_json(&json),
        "Error: downloaded data is not a valid dictionary: {}"
    );
    die!(
        fs::write(output_file, &json),
        "Error writing {output_file}: {}"
    );
    eprintln!("Wrote {output_file} ({} words)", dict.len());
}
