use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::SystemTime;

use super::error::LoadError;
use super::loader;
use super::matcher;
use super::normalize::normalize_term;
use super::schema::LanguageProfile;
use crate::model::entry::{GlossaryEntry, Match};
use crate::model::language::LanguageCode;
use crate::model::settings::Settings;
use crate::model::table::{GlossaryTable, TableInfo};

/// Outcome of a successful load.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub language: LanguageCode,
    pub term_count: usize,
    pub entry_count: usize,
    pub skipped_rows: usize,
    pub overwritten_rows: usize,
    pub source_path: String,
    pub encoding: String,
}

struct LanguageSlot {
    profile: LanguageProfile,
    table: GlossaryTable,
}

/// Term tables of every supported language, one of them active.
pub struct GlossaryStore {
    slots: BTreeMap<LanguageCode, LanguageSlot>,
    active: LanguageCode,
    // answered when no language is registered at all
    empty: GlossaryTable,
}

impl GlossaryStore {
    /// Builds a store with an empty table per profile. The first profile is
    /// active unless `active` names another registered language.
    pub fn new(profiles: Vec<LanguageProfile>, active: LanguageCode) -> Self {
        let first = profiles.first().map(|p| p.code);

        let slots: BTreeMap<LanguageCode, LanguageSlot> = profiles
            .into_iter()
            .map(|profile| {
                (
                    profile.code,
                    LanguageSlot {
                        profile,
                        table: GlossaryTable::new(),
                    },
                )
            })
            .collect();

        let active = if slots.contains_key(&active) {
            active
        } else {
            first.unwrap_or(active)
        };

        GlossaryStore {
            slots,
            active,
            empty: GlossaryTable::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            LanguageProfile::all(&settings.case_sensitive_terms),
            settings.default_language,
        )
    }

    pub fn languages(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        self.slots.keys().copied()
    }

    pub fn is_supported(&self, code: LanguageCode) -> bool {
        self.slots.contains_key(&code)
    }

    /// Parses a language code and checks it is registered in this store.
    pub fn resolve_language(&self, code: &str) -> Result<LanguageCode, LoadError> {
        LanguageCode::parse(code)
            .filter(|c| self.is_supported(*c))
            .ok_or_else(|| LoadError::UnsupportedLanguageCode(code.to_string()))
    }

    /// Loads a glossary file into the table of `language`.
    ///
    /// The replacement table is built in full before it is published; on any
    /// error the previous table of that language is kept.
    pub fn load_glossary(
        &mut self,
        path: &Path,
        language: LanguageCode,
    ) -> Result<LoadReport, LoadError> {
        let slot = self
            .slots
            .get_mut(&language)
            .ok_or_else(|| LoadError::UnsupportedLanguageCode(language.to_string()))?;

        let parsed = match loader::read_glossary(path, &slot.profile.schema) {
            Ok(p) => p,
            Err(e) => {
                log::error!("failed to load {} glossary {}: {}", language, path.display(), e);
                return Err(e);
            }
        };

        let mut table = parsed.table;
        table.last_loaded = Some(SystemTime::now());

        let report = LoadReport {
            language,
            term_count: table.term_count(),
            entry_count: table.entry_count(),
            skipped_rows: parsed.skipped_rows,
            overwritten_rows: parsed.overwritten_rows,
            source_path: path.to_string_lossy().to_string(),
            encoding: parsed.encoding,
        };

        slot.table = table;

        log::info!(
            "loaded {} {} terms from {} ({} skipped, {} duplicates)",
            report.term_count,
            language,
            path.display(),
            report.skipped_rows,
            report.overwritten_rows
        );

        Ok(report)
    }

    /// Switches the active language. Unknown codes leave the store unchanged.
    pub fn set_active_language(&mut self, code: &str) -> bool {
        match LanguageCode::parse(code) {
            Some(c) if self.is_supported(c) => {
                self.active = c;
                true
            }
            _ => {
                log::warn!("ignoring unsupported language code '{}'", code);
                false
            }
        }
    }

    pub fn active_language(&self) -> LanguageCode {
        self.active
    }

    pub fn table(&self, language: LanguageCode) -> Option<&GlossaryTable> {
        self.slots.get(&language).map(|s| &s.table)
    }

    pub fn active_table(&self) -> &GlossaryTable {
        self.table(self.active).unwrap_or(&self.empty)
    }

    pub fn active_info(&self) -> TableInfo {
        self.active_table().info(self.active)
    }

    pub fn lookup(&self, term: &str) -> Option<&GlossaryEntry> {
        self.active_table().get(&normalize_term(term))
    }

    /// Value of one column of an active-language entry, for copying.
    pub fn entry_field(&self, term: &str, column: &str) -> Option<&str> {
        self.lookup(term).and_then(|e| e.field(column))
    }

    pub fn find_terms_in_text(&self, text: &str) -> Vec<Match> {
        match self.slots.get(&self.active) {
            Some(slot) => matcher::find_terms(text, &slot.table, &slot.profile.strategy),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
