use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl DocumentMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keywords_raw(raw: &str) -> Self {
        DocumentMetadata {
            keywords: parse_keywords(raw),
        }
    }
}

/// Split on commas, trim each piece, drop empties.
/// Order is kept and duplicates are retained.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
