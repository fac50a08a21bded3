//! Phoneme symbol tables and the longest-match tokenizer over them.
//!
//! Tables are loaded from an embedded TOML file (overridable once via
//! [`init_custom`]) into a character trie, so tokenizing a position always
//! picks the longest symbol that matches there.

mod config;
mod table;
mod tokenize;
mod trie;

pub use config::{parse_phonemes_toml, PhonemeConfigError, PhonemeTables};
pub use table::{default_toml, init_custom, is_exotic, is_stress_mark, SymbolTable};
pub use tokenize::{tokenize_phonemes, PhonemeToken};
pub use trie::{PhonemeTrie, TrieLookupResult};

/// The (IPA, kfa) pairs of the active table, in table order.
pub fn supported_phonemes() -> &'static [(String, String)] {
    SymbolTable::ipa_to_kfa().pairs()
}
