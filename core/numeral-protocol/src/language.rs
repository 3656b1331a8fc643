use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::error::NumeralError;

/// The closed set of supported locales. The first one is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[repr(u8)]
pub enum Language {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en-us"))]
    EnUs = 0,
    #[cfg_attr(feature = "serde", serde(rename = "nl-nl"))]
    NlNl = 1,
    #[cfg_attr(feature = "serde", serde(rename = "de-de"))]
    DeDe = 2,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::EnUs, Language::NlNl, Language::DeDe];

    pub const fn tag(self) -> &'static str {
        match self {
            Language::EnUs => "en-us",
            Language::NlNl => "nl-nl",
            Language::DeDe => "de-de",
        }
    }
}

impl FromStr for Language {
    type Err = NumeralError;

    /// Tags are matched case-insensitively; `_` is accepted for `-`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let wanted = tag.trim().to_lowercase().replace('_', "-");
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag() == wanted)
            .ok_or_else(|| NumeralError::UnsupportedLanguage(tag.to_string()))
    }
}

/// Deserialization goes through the same lenient tag parsing as `FromStr`.
impl TryFrom<String> for Language {
    type Error = NumeralError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
