use serde::{Deserialize, Serialize};

/// One column of a glossary row, under its display header name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EntryField {
    pub name: String,

    #[serde(default)]
    pub value: String,
}

/// A glossary row keyed by its normalized term.
///
/// Every language shares this shape. English rows carry the fields
/// `term`, `translation` and `notes`; other languages carry every column
/// of the source file in header order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub key: String,

    #[serde(default)]
    pub fields: Vec<EntryField>,
}

impl GlossaryEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// A glossary term found in scanned text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Match {
    /// Term as it should be displayed (original casing for case-sensitive terms).
    pub term: String,

    pub key: String,

    #[serde(default)]
    pub fields: Vec<EntryField>,
}

impl Match {
    pub fn from_entry(term: impl Into<String>, entry: &GlossaryEntry) -> Self {
        Match {
            term: term.into(),
            key: entry.key.clone(),
            fields: entry.fields.clone(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
