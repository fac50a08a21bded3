use serde::{Deserialize, Serialize};

/// One recorded pronunciation of a word. Priority 1 is the preferred one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub ipa: String,
    pub priority: u32,
    #[serde(default)]
    pub region: String,
}

impl DictEntry {
    pub fn new(ipa: impl Into<String>, priority: u32) -> Self {
        Self {
            ipa: ipa.into(),
            priority,
            region: String::new(),
        }
    }
}
