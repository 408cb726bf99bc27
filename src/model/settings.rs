use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::language::LanguageCode;

fn default_search_dirs() -> Vec<String> {
    vec![String::new(), "resources".to_string()]
}

fn default_glossary_files() -> BTreeMap<LanguageCode, String> {
    BTreeMap::from([
        (LanguageCode::En, "Ja_En_Glossary.csv".to_string()),
        (LanguageCode::Ko, "Ja_Ko_Glossary.csv".to_string()),
        (LanguageCode::Zh, "Ja_Zh_Glossary.csv".to_string()),
    ])
}

fn default_case_sensitive_terms() -> Vec<String> {
    vec!["AND".to_string(), "WHO".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub default_language: LanguageCode,

    /// Directories searched for glossary files, in order. Relative entries
    /// resolve against the working directory.
    #[serde(default = "default_search_dirs")]
    pub search_dirs: Vec<String>,

    /// Also search `resources/` and `../resources/` next to the executable.
    #[serde(default = "default_true")]
    pub search_exe_dir: bool,

    #[serde(default = "default_glossary_files")]
    pub glossary_files: BTreeMap<LanguageCode, String>,

    /// English terms that only match with this exact casing, e.g. acronyms
    /// that collide with common lowercase words.
    #[serde(default = "default_case_sensitive_terms", alias = "case_sensitive")]
    pub case_sensitive_terms: Vec<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_language: LanguageCode::default(),
            search_dirs: default_search_dirs(),
            search_exe_dir: true,
            glossary_files: default_glossary_files(),
            case_sensitive_terms: default_case_sensitive_terms(),
            log_level: default_log_level(),
        }
    }
}
