use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::SystemTime;

use super::entry::GlossaryEntry;
use super::language::LanguageCode;

/// Term table of a single language.
///
/// Entries keep the order in which their key first appeared in the source
/// file; a later row with the same key replaces the value in place.
/// `term_count` counts every inserted row, duplicates included.
#[derive(Debug, Clone, Default)]
pub struct GlossaryTable {
    entries: Vec<GlossaryEntry>,
    index: HashMap<String, usize>,
    term_count: usize,
    pub header: Vec<String>,
    pub source_path: Option<PathBuf>,
    pub last_loaded: Option<SystemTime>,
}

impl GlossaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry. Returns true when an earlier row was overwritten.
    pub fn insert(&mut self, entry: GlossaryEntry) -> bool {
        self.term_count += 1;
        match self.index.get(&entry.key) {
            Some(&pos) => {
                self.entries[pos] = entry;
                true
            }
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
                false
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&GlossaryEntry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.entries.iter()
    }

    /// Number of valid rows loaded.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    /// Number of distinct keys.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn info(&self, language: LanguageCode) -> TableInfo {
        TableInfo {
            language,
            term_count: self.term_count(),
            entry_count: self.entry_count(),
            header: self.header.clone(),
            source_path: self
                .source_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            last_loaded: self
                .last_loaded
                .map(|t| humantime::format_rfc3339_seconds(t).to_string()),
        }
    }
}

/// Metadata of a table, as reported to the presentation layer.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub language: LanguageCode,
    pub term_count: usize,
    pub entry_count: usize,
    pub header: Vec<String>,
    pub source_path: Option<String>,
    pub last_loaded: Option<String>,
}
