use serde_json::{json, Value};
use std::path::PathBuf;

use super::CoreState;
use crate::model::language::LanguageCode;
use crate::services::glossary::discovery;
use crate::services::text;

fn str_field<'a>(payload: &'a Value, name: &str) -> &'a str {
    payload.get(name).and_then(|v| v.as_str()).unwrap_or("")
}

pub fn languages_list(state: &CoreState) -> Value {
    let languages: Vec<Value> = state
        .store
        .languages()
        .map(|code| {
            let table = state.store.table(code);
            json!({
                "code": code,
                "name": code.display_name(),
                "term_count": table.map(|t| t.term_count()).unwrap_or(0),
                "loaded": table.is_some_and(|t| t.source_path.is_some()),
            })
        })
        .collect();

    json!({
        "languages": languages,
        "active": state.store.active_language(),
    })
}

pub fn language_set(state: &mut CoreState, payload: &Value) -> Result<Value, String> {
    let language = str_field(payload, "language");
    if language.is_empty() {
        return Err("payload.language is required".into());
    }

    if !state.store.set_active_language(language) {
        return Err(format!("unsupported language code: {language}"));
    }

    Ok(json!({
        "active": state.store.active_language(),
        "term_count": state.store.active_table().term_count(),
    }))
}

pub fn glossary_load(state: &mut CoreState, payload: &Value) -> Result<Value, String> {
    let path = str_field(payload, "path");
    let language = str_field(payload, "language");

    if path.is_empty() {
        return Err("payload.path is required".into());
    }

    // language defaults to the active one, as the file dialog loads into the current tab
    let code: LanguageCode = if language.is_empty() {
        state.store.active_language()
    } else {
        state.store.resolve_language(language).map_err(|e| e.to_string())?
    };

    state
        .store
        .load_glossary(&PathBuf::from(path), code)
        .map(|report| json!(report))
        .map_err(|e| e.to_string())
}

pub fn glossary_discover(state: &mut CoreState) -> Value {
    let report = discovery::discover(&mut state.store, &state.settings);
    json!(report)
}

pub fn glossary_info(state: &CoreState) -> Value {
    json!(state.store.active_info())
}

pub fn glossary_lookup(state: &CoreState, payload: &Value) -> Result<Value, String> {
    let term = str_field(payload, "term");
    if term.trim().is_empty() {
        return Err("payload.term is required".into());
    }

    Ok(json!({ "entry": state.store.lookup(term) }))
}

pub fn terms_find(state: &CoreState, payload: &Value) -> Value {
    let text = str_field(payload, "text");
    let matches = state.store.find_terms_in_text(text);

    json!({
        "language": state.store.active_language(),
        "header": state.store.active_table().header,
        "matches": matches,
    })
}

pub fn match_field(state: &CoreState, payload: &Value) -> Result<Value, String> {
    let term = str_field(payload, "term");
    let column = str_field(payload, "column");

    if term.trim().is_empty() {
        return Err("payload.term is required".into());
    }
    if column.is_empty() {
        return Err("payload.column is required".into());
    }

    match state.store.entry_field(term, column) {
        Some(value) => Ok(json!({ "value": value })),
        None => Err(format!("no column '{column}' for term '{term}'")),
    }
}

pub fn text_open(payload: &Value) -> Result<Value, String> {
    let path = str_field(payload, "path");
    if path.is_empty() {
        return Err("payload.path is required".into());
    }

    let decoded = text::open_text_file(&PathBuf::from(path)).map_err(|e| e.to_string())?;
    Ok(json!({
        "text": decoded.text,
        "encoding": decoded.encoding,
    }))
}
