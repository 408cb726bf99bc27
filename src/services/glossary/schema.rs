use regex::Regex;

use super::normalize::{is_word_char, normalize_term, TOKEN_PUNCTUATION};
use crate::model::language::LanguageCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMatch {
    /// Header cells are trimmed and lower-cased before comparison.
    CaseInsensitive,
    /// Header cells are trimmed and compared as written.
    Exact,
}

/// Where the semantic columns of a glossary file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub term_column: String,
    pub translation_column: String,
    pub notes_column: Option<String>,
    pub header_match: HeaderMatch,

    /// Keep every source column in the entry, under its literal header name.
    /// When false only term/translation/notes are kept.
    pub keep_all_columns: bool,
}

/// Column indices resolved against one file's header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub term: usize,
    pub translation: usize,
    pub notes: Option<usize>,

    /// Header as published on the table.
    pub display_header: Vec<String>,
}

impl ColumnSchema {
    pub fn english() -> Self {
        ColumnSchema {
            term_column: "term".to_string(),
            translation_column: "translation".to_string(),
            notes_column: Some("notes".to_string()),
            header_match: HeaderMatch::CaseInsensitive,
            keep_all_columns: false,
        }
    }

    pub fn whole_row(term_column: &str, translation_column: &str, notes_column: &str) -> Self {
        ColumnSchema {
            term_column: term_column.to_string(),
            translation_column: translation_column.to_string(),
            notes_column: Some(notes_column.to_string()),
            header_match: HeaderMatch::Exact,
            keep_all_columns: true,
        }
    }

    fn header_key(&self, cell: &str) -> String {
        match self.header_match {
            HeaderMatch::CaseInsensitive => cell.trim().to_lowercase(),
            HeaderMatch::Exact => cell.trim().to_string(),
        }
    }

    /// Locates the required columns, or returns the names of the missing ones.
    pub fn resolve(&self, header: &[String]) -> Result<ResolvedColumns, Vec<String>> {
        let keys: Vec<String> = header.iter().map(|h| self.header_key(h)).collect();
        let position = |name: &str| {
            let wanted = self.header_key(name);
            keys.iter().position(|k| *k == wanted)
        };

        let term = position(&self.term_column);
        let translation = position(&self.translation_column);

        let (term, translation) = match (term, translation) {
            (Some(t), Some(tr)) => (t, tr),
            _ => {
                let mut missing = Vec::new();
                if term.is_none() {
                    missing.push(self.term_column.clone());
                }
                if translation.is_none() {
                    missing.push(self.translation_column.clone());
                }
                return Err(missing);
            }
        };

        let notes = self.notes_column.as_deref().and_then(position);

        let display_header = if self.keep_all_columns {
            header.iter().map(|h| h.trim().to_string()).collect()
        } else {
            let mut h = vec![self.term_column.clone(), self.translation_column.clone()];
            if let Some(n) = &self.notes_column {
                h.push(n.clone());
            }
            h
        };

        Ok(ResolvedColumns {
            term,
            translation,
            notes,
            display_header,
        })
    }
}

/// An English term that only matches with its exact casing.
#[derive(Debug, Clone)]
pub struct CaseSensitiveTerm {
    pub term: String,
    pub key: String,
    pub pattern: Regex,
}

impl CaseSensitiveTerm {
    pub fn new(term: &str) -> Result<Self, regex::Error> {
        let term = term.trim();
        let pattern = Regex::new(&bounded_pattern(term))?;
        Ok(CaseSensitiveTerm {
            term: term.to_string(),
            key: normalize_term(term),
            pattern,
        })
    }
}

// `\b` only holds next to a word character; a term like `C++` is bounded
// by a non-word character or the end of the text instead.
fn bounded_pattern(term: &str) -> String {
    let starts_word = term.chars().next().is_some_and(is_word_char);
    let ends_word = term.chars().next_back().is_some_and(is_word_char);

    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { r"(?:^|\W)" },
        regex::escape(term),
        if ends_word { r"\b" } else { r"(?:\W|$)" },
    )
}

/// How text is scanned for the terms of a language.
#[derive(Debug, Clone)]
pub enum MatchStrategy {
    /// Word tokens and multi-word substrings; some terms are case-sensitive.
    WordBoundary { case_sensitive: Vec<CaseSensitiveTerm> },
    /// Whitespace tokens with punctuation stripped, then substrings.
    WhitespaceTokens { strip: &'static [char] },
    /// Substring containment only, for scripts written without spaces.
    Substring,
}

impl MatchStrategy {
    pub fn word_boundary(case_sensitive_terms: &[String]) -> Self {
        let case_sensitive = case_sensitive_terms
            .iter()
            .filter(|t| !t.trim().is_empty())
            .filter_map(|t| match CaseSensitiveTerm::new(t) {
                Ok(term) => Some(term),
                Err(e) => {
                    log::warn!("skipping case-sensitive term '{}': {}", t, e);
                    None
                }
            })
            .collect();

        MatchStrategy::WordBoundary { case_sensitive }
    }
}

/// Everything that differs between languages, chosen once per language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub code: LanguageCode,
    pub schema: ColumnSchema,
    pub strategy: MatchStrategy,
}

impl LanguageProfile {
    pub fn for_language(code: LanguageCode, case_sensitive_terms: &[String]) -> Self {
        let (schema, strategy) = match code {
            LanguageCode::En => (
                ColumnSchema::english(),
                MatchStrategy::word_boundary(case_sensitive_terms),
            ),
            LanguageCode::Ko => (
                ColumnSchema::whole_row("ハングル", "日本語", "メモ"),
                MatchStrategy::WhitespaceTokens {
                    strip: TOKEN_PUNCTUATION,
                },
            ),
            LanguageCode::Zh => (
                ColumnSchema::whole_row("中文", "日本語", "メモ"),
                MatchStrategy::Substring,
            ),
        };

        LanguageProfile {
            code,
            schema,
            strategy,
        }
    }

    /// Profiles of every supported language.
    pub fn all(case_sensitive_terms: &[String]) -> Vec<Self> {
        LanguageCode::ALL
            .iter()
            .map(|&code| Self::for_language(code, case_sensitive_terms))
            .collect()
    }
}
