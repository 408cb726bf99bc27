// Tests for GlossaryStore
// - Loading counts valid rows and publishes metadata
// - Lookup normalizes its input
// - Rejected loads keep whatever table was there before
// - Unsupported languages never change the active table
// - Every match can be looked up again by its key

use super::*;
use crate::services::glossary::schema::LanguageProfile;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ENGLISH_CSV: &str = "term,translation,notes\n\
                           operator,演算子,\n\
                           and,論理積,logic\n\
                           who,世界保健機関,\n\
                           machine learning,機械学習,\n\
                           ,空,\n";

fn default_store() -> GlossaryStore {
    GlossaryStore::from_settings(&Settings::default())
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_counts_valid_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "en.csv", ENGLISH_CSV);
    let mut store = default_store();

    let report = store.load_glossary(&path, LanguageCode::En).unwrap();

    assert_eq!(report.term_count, 4);
    assert_eq!(report.skipped_rows, 1);
    assert_eq!(report.encoding, "utf-8");

    let info = store.active_info();
    assert_eq!(info.language, LanguageCode::En);
    assert_eq!(info.term_count, 4);
    assert_eq!(info.header, vec!["term", "translation", "notes"]);
    assert_eq!(info.source_path, Some(path.to_string_lossy().to_string()));
    assert!(info.last_loaded.is_some());
}

#[test]
fn test_term_count_includes_duplicate_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "en.csv",
        "term,translation\nalpha,一\nbeta,二\nAlpha,三\n",
    );
    let mut store = default_store();

    let report = store.load_glossary(&path, LanguageCode::En).unwrap();

    assert_eq!(report.term_count, 3);
    assert_eq!(report.entry_count, 2);
    assert_eq!(report.overwritten_rows, 1);
    assert_eq!(store.active_info().term_count, 3);
    assert_eq!(store.lookup("alpha").and_then(|e| e.field("translation")), Some("三"));
}

#[test]
fn test_lookup_is_normalization_stable() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "en.csv", ENGLISH_CSV);
    let mut store = default_store();
    store.load_glossary(&path, LanguageCode::En).unwrap();

    let a = store.lookup("Operator").unwrap();
    let b = store.lookup(" operator ").unwrap();
    let c = store.lookup("OPERATOR").unwrap();

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert!(store.lookup("unknown").is_none());
}

#[test]
fn test_missing_columns_leave_fresh_table_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.csv", "word,meaning\noperator,演算子\n");
    let mut store = default_store();

    let err = store.load_glossary(&path, LanguageCode::En).unwrap_err();

    assert!(matches!(err, LoadError::MissingRequiredColumns(_)));
    assert_eq!(store.active_table().term_count(), 0);
    assert!(store.active_info().source_path.is_none());
}

#[test]
fn test_rejected_load_keeps_previous_table() {
    let dir = TempDir::new().unwrap();
    let good = write_file(&dir, "en.csv", ENGLISH_CSV);
    let bad = write_file(&dir, "bad.csv", "word,meaning\nfoo,bar\n");
    let mut store = default_store();
    store.load_glossary(&good, LanguageCode::En).unwrap();

    assert!(store.load_glossary(&bad, LanguageCode::En).is_err());
    assert!(store
        .load_glossary(&dir.path().join("missing.csv"), LanguageCode::En)
        .is_err());

    assert_eq!(store.active_table().term_count(), 4);
    assert_eq!(
        store.active_info().source_path,
        Some(good.to_string_lossy().to_string())
    );
}

#[test]
fn test_missing_file_is_not_readable() {
    let dir = TempDir::new().unwrap();
    let mut store = default_store();

    let err = store
        .load_glossary(&dir.path().join("nope.csv"), LanguageCode::Ko)
        .unwrap_err();

    assert!(matches!(err, LoadError::FileNotReadable { .. }));
}

#[test]
fn test_unsupported_language_keeps_active_table() {
    let mut store = default_store();
    assert!(store.set_active_language("zh"));

    assert!(!store.set_active_language("fr"));
    assert!(!store.set_active_language(""));
    assert_eq!(store.active_language(), LanguageCode::Zh);

    assert!(store.set_active_language(" KO "));
    assert_eq!(store.active_language(), LanguageCode::Ko);
}

#[test]
fn test_switching_language_does_not_touch_tables() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "en.csv", ENGLISH_CSV);
    let mut store = default_store();
    store.load_glossary(&path, LanguageCode::En).unwrap();

    store.set_active_language("ko");
    assert_eq!(store.active_table().term_count(), 0);
    assert!(store.lookup("operator").is_none());

    store.set_active_language("en");
    assert_eq!(store.active_table().term_count(), 4);
}

#[test]
fn test_matches_are_retrievable_by_key() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "en.csv", ENGLISH_CSV);
    let mut store = default_store();
    store.load_glossary(&path, LanguageCode::En).unwrap();

    let matches = store.find_terms_in_text("Machine learning: the AND operator");
    assert_eq!(matches.len(), 3);

    for m in &matches {
        let entry = store.lookup(&m.key).unwrap();
        assert_eq!(entry.fields, m.fields);
    }
}

#[test]
fn test_unregistered_language_is_unsupported() {
    let store = GlossaryStore::new(
        vec![LanguageProfile::for_language(LanguageCode::En, &[])],
        LanguageCode::Zh,
    );

    assert_eq!(store.active_language(), LanguageCode::En);
    assert!(matches!(
        store.resolve_language("zh"),
        Err(LoadError::UnsupportedLanguageCode(_))
    ));
    assert!(matches!(
        store.resolve_language("xx"),
        Err(LoadError::UnsupportedLanguageCode(_))
    ));
    assert_eq!(store.resolve_language("en").unwrap(), LanguageCode::En);
}

#[test]
fn test_entry_field_for_copy() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "zh.csv",
        "中文,日本語,メモ\n服务器,サーバー,機器\n",
    );
    let mut store = default_store();
    store.load_glossary(&path, LanguageCode::Zh).unwrap();
    store.set_active_language("zh");

    assert_eq!(store.entry_field("服务器", "日本語"), Some("サーバー"));
    assert_eq!(store.entry_field("服务器", "メモ"), Some("機器"));
    assert_eq!(store.entry_field("服务器", "english"), None);
    assert_eq!(store.entry_field("网络", "日本語"), None);
}
