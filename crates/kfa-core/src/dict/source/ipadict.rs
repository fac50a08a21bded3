use crate::dict::{DictEntry, PronunciationDictionary};

/// Parse the plain-text `ipadict.txt` format.
///
/// Each line is `word<whitespace>ipa`. Words are lowercased and a trailing
/// variant marker such as `(2)` is stripped so that variants group under one
/// word; each variant's priority is its 1-based position within the group.
/// Blank lines and lines without an IPA column are skipped.
pub fn parse_ipadict_txt(content: &str) -> PronunciationDictionary {
    let mut words: Vec<(String, Vec<DictEntry>)> = Vec::new();
    let mut positions: std::collections::HashMap<String, usize> = Default::default();

    for line in content.lines() {
        let line = line.trim();
        let Some((word, ipa)) = line.split_once(char::is_whitespace) else {
            continue;
        };
        let ipa = ipa.trim();
        if ipa.is_empty() {
            continue;
        }
        let word = strip_variant_marker(&word.to_lowercase()).to_string();

        let slot = *positions.entry(word.clone()).or_insert_with(|| {
            words.push((word, Vec::new()));
            words.len() - 1
        });
        let entries = &mut words[slot].1;
        let priority = entries.len() as u32 + 1;
        entries.push(DictEntry::new(ipa, priority));
    }

    PronunciationDictionary::from_entries(words)
}

/// "read(2)" → "read"; anything else is returned unchanged.
fn strip_variant_marker(word: &str) -> &str {
    let Some(open) = word.rfind('(') else {
        return word;
    };
    let marker = &word[open + 1..];
    match marker.strip_suffix(')') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            &word[..open]
        }
        _ => word,
    }
}
