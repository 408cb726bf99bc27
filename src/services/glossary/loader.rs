use std::fs;
use std::path::Path;

use super::error::LoadError;
use super::normalize::normalize_term;
use super::schema::{ColumnSchema, ResolvedColumns};
use crate::model::entry::{EntryField, GlossaryEntry};
use crate::model::table::GlossaryTable;
use crate::services::encoding;

/// A table parsed from one file, not yet published to the store.
#[derive(Debug)]
pub struct ParsedGlossary {
    pub table: GlossaryTable,
    pub skipped_rows: usize,
    pub overwritten_rows: usize,
    pub encoding: String,
}

pub fn read_glossary(path: &Path, schema: &ColumnSchema) -> Result<ParsedGlossary, LoadError> {
    let bytes = fs::read(path).map_err(|e| LoadError::FileNotReadable {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let decoded = encoding::decode(&bytes);
    let mut parsed = parse_glossary(&decoded.text, schema)?;
    parsed.encoding = decoded.encoding;
    parsed.table.source_path = Some(path.to_path_buf());

    Ok(parsed)
}

/// Parses CSV text into a table. The header is validated before any row is read.
pub fn parse_glossary(text: &str, schema: &ColumnSchema) -> Result<ParsedGlossary, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(Ok(rec)) => rec.iter().map(str::to_string).collect(),
        Some(Err(e)) => return Err(LoadError::EmptyOrMalformedCsv(e.to_string())),
        None => return Err(LoadError::EmptyOrMalformedCsv("no header row".into())),
    };

    let columns = schema
        .resolve(&header)
        .map_err(LoadError::MissingRequiredColumns)?;

    let mut table = GlossaryTable::new();
    table.header = columns.display_header.clone();

    let mut skipped_rows = 0usize;
    let mut overwritten_rows = 0usize;

    for (i, rec) in records.enumerate() {
        let rec = rec.map_err(|e| LoadError::EmptyOrMalformedCsv(e.to_string()))?;
        let row: Vec<&str> = rec.iter().collect();

        match build_entry(&row, &columns, schema) {
            Some(entry) => {
                if table.insert(entry) {
                    overwritten_rows += 1;
                }
            }
            None => {
                // header is line 1
                log::debug!("skipping glossary row {}: missing term or translation", i + 2);
                skipped_rows += 1;
            }
        }
    }

    Ok(ParsedGlossary {
        table,
        skipped_rows,
        overwritten_rows,
        encoding: "utf-8".to_string(),
    })
}

fn build_entry(
    row: &[&str],
    columns: &ResolvedColumns,
    schema: &ColumnSchema,
) -> Option<GlossaryEntry> {
    if row.len() <= columns.term.max(columns.translation) {
        return None;
    }

    let key = normalize_term(row[columns.term]);
    let translation = row[columns.translation].trim();
    if key.is_empty() || translation.is_empty() {
        return None;
    }

    let cell = |idx: usize| row.get(idx).map(|c| c.trim()).unwrap_or("").to_string();

    let fields = if schema.keep_all_columns {
        columns
            .display_header
            .iter()
            .enumerate()
            .map(|(idx, name)| EntryField {
                name: name.clone(),
                value: cell(idx),
            })
            .collect()
    } else {
        let notes = columns.notes.map(cell).unwrap_or_default();
        let mut fields = vec![
            EntryField {
                name: schema.term_column.clone(),
                value: key.clone(),
            },
            EntryField {
                name: schema.translation_column.clone(),
                value: translation.to_string(),
            },
        ];
        if let Some(name) = &schema.notes_column {
            fields.push(EntryField {
                name: name.clone(),
                value: notes,
            });
        }
        fields
    };

    Some(GlossaryEntry { key, fields })
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
