//! Per-call conversion options

use numeral_protocol::Language;
use serde::{Deserialize, Serialize};

/// Options for one conversion call. Deserializes from the camelCase JSON form
/// (`{"numbersOnly": true, "language": "nl-nl"}`); missing keys take defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Return every region's value and drop the surrounding text
    pub numbers_only: bool,

    /// Glue all region values into one number ("nineteen ninety-eight" → 1998)
    pub one_number: bool,

    pub language: Language,

    /// Log the matched region structure at debug level
    pub debug: bool,
}

impl Options {
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Load options from their JSON form. Language tags are parsed leniently
    /// ("NL_nl"); an unknown one is an error.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse options: {}", e))
    }

    /// Serialize options to their JSON form
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize options: {}", e))
    }
}
