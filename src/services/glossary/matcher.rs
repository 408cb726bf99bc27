use std::collections::HashSet;

use super::normalize::{strip_punctuation, word_tokens};
use super::schema::{CaseSensitiveTerm, MatchStrategy};
use crate::model::entry::Match;
use crate::model::table::GlossaryTable;

/// Finds every distinct glossary term present in `text`.
///
/// Each term is reported once, in an order that depends on the strategy.
pub fn find_terms(text: &str, table: &GlossaryTable, strategy: &MatchStrategy) -> Vec<Match> {
    if text.is_empty() || table.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut found = Found::new(table);

    match strategy {
        MatchStrategy::WordBoundary { case_sensitive } => {
            word_boundary(text, &lowered, &mut found, case_sensitive)
        }
        MatchStrategy::WhitespaceTokens { strip } => {
            for token in lowered.split_whitespace() {
                found.emit_key(strip_punctuation(token, strip));
            }
            substring_scan(&lowered, &mut found, |_| true);
        }
        MatchStrategy::Substring => substring_scan(&lowered, &mut found, |_| true),
    }

    found.results
}

fn word_boundary(
    original: &str,
    lowered: &str,
    found: &mut Found,
    case_sensitive: &[CaseSensitiveTerm],
) {
    let exact_only: HashSet<&str> = case_sensitive.iter().map(|t| t.key.as_str()).collect();

    for token in word_tokens(lowered) {
        if !exact_only.contains(token) {
            found.emit_key(token);
        }
    }

    substring_scan(lowered, found, |key| {
        key.contains(' ') && !exact_only.contains(key)
    });

    for cs in case_sensitive {
        if found.emitted(&cs.key) || !found.table.contains(&cs.key) {
            continue;
        }
        if cs.pattern.is_match(original) {
            found.emit_as(&cs.key, &cs.term);
        }
    }
}

fn substring_scan(lowered: &str, found: &mut Found, eligible: impl Fn(&str) -> bool) {
    let table = found.table;
    for entry in table.iter() {
        if eligible(&entry.key) && lowered.contains(entry.key.as_str()) {
            found.emit_key(&entry.key);
        }
    }
}

struct Found<'a> {
    table: &'a GlossaryTable,
    seen: HashSet<String>,
    results: Vec<Match>,
}

impl<'a> Found<'a> {
    fn new(table: &'a GlossaryTable) -> Self {
        Found {
            table,
            seen: HashSet::new(),
            results: Vec::new(),
        }
    }

    fn emitted(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    fn emit_key(&mut self, key: &str) {
        self.emit_as(key, key);
    }

    fn emit_as(&mut self, key: &str, display: &str) {
        if key.is_empty() || self.seen.contains(key) {
            return;
        }
        if let Some(entry) = self.table.get(key) {
            self.seen.insert(key.to_string());
            self.results.push(Match::from_entry(display, entry));
        }
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
