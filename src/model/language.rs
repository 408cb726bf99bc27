use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum LanguageCode {
    #[default]
    En,
    Ko,
    Zh,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Ko, LanguageCode::Zh];

    /// Accepts the two-letter code, ignoring surrounding whitespace and case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(LanguageCode::En),
            "ko" => Some(LanguageCode::Ko),
            "zh" => Some(LanguageCode::Zh),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ko => "ko",
            LanguageCode::Zh => "zh",
        }
    }

    /// Name shown in the language selector, written in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Ko => "한국어",
            LanguageCode::Zh => "中文",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
