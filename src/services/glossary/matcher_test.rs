// Tests for term matching
// - English: whole-word tokens, multi-word substrings, exact-case exceptions
// - Korean: punctuation-stripped whitespace tokens, then substrings
// - Chinese: substring containment in glossary order, one match per term

use super::*;
use crate::services::glossary::loader::parse_glossary;
use crate::services::glossary::normalize::TOKEN_PUNCTUATION;
use crate::services::glossary::schema::ColumnSchema;

fn english(rows: &[(&str, &str)]) -> GlossaryTable {
    let mut csv = String::from("term,translation,notes\n");
    for (term, translation) in rows {
        csv.push_str(&format!("{term},{translation},\n"));
    }
    parse_glossary(&csv, &ColumnSchema::english()).unwrap().table
}

fn whole_row(term_column: &str, rows: &[(&str, &str)]) -> GlossaryTable {
    let mut csv = format!("{term_column},日本語,メモ\n");
    for (term, translation) in rows {
        csv.push_str(&format!("{term},{translation},\n"));
    }
    parse_glossary(&csv, &ColumnSchema::whole_row(term_column, "日本語", "メモ"))
        .unwrap()
        .table
}

fn terms(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.term.as_str()).collect()
}

fn default_english_strategy() -> MatchStrategy {
    MatchStrategy::word_boundary(&["AND".to_string(), "WHO".to_string()])
}

#[test]
fn test_case_sensitive_terms_need_exact_case() {
    let table = english(&[("and", "論理積"), ("who", "世界保健機関"), ("operator", "演算子")]);
    let strategy = default_english_strategy();

    let matches = find_terms("The AND operator and the who", &table, &strategy);

    assert_eq!(terms(&matches), vec!["operator", "AND"]);
    assert_eq!(matches[1].key, "and");
    assert_eq!(matches[1].field("translation"), Some("論理積"));
}

#[test]
fn test_case_sensitive_term_lowercase_only_is_not_matched() {
    let table = english(&[("and", "論理積"), ("who", "世界保健機関")]);
    let matches = find_terms("who said and", &table, &default_english_strategy());

    assert!(matches.is_empty());
}

#[test]
fn test_case_sensitive_term_needs_word_boundary() {
    let table = english(&[("who", "世界保健機関")]);
    let matches = find_terms("WHOLESALE prices", &table, &default_english_strategy());

    assert!(matches.is_empty());

    let matches = find_terms("Ask the WHO.", &table, &default_english_strategy());
    assert_eq!(terms(&matches), vec!["WHO"]);
}

#[test]
fn test_english_is_case_insensitive_for_regular_terms() {
    let table = english(&[("server", "サーバー")]);
    let strategy = MatchStrategy::word_boundary(&[]);

    let matches = find_terms("The SERVER and the Server", &table, &strategy);

    assert_eq!(terms(&matches), vec!["server"]);
}

#[test]
fn test_english_single_words_do_not_match_inside_words() {
    let table = english(&[("api", "API")]);
    let strategy = MatchStrategy::word_boundary(&[]);

    assert!(find_terms("capitalize", &table, &strategy).is_empty());
    assert_eq!(terms(&find_terms("call the api, then", &table, &strategy)), vec!["api"]);
}

#[test]
fn test_english_multi_word_terms_follow_single_words() {
    let table = english(&[("machine learning", "機械学習"), ("model", "モデル")]);
    let strategy = MatchStrategy::word_boundary(&[]);

    let matches = find_terms("Machine Learning needs a model", &table, &strategy);

    assert_eq!(terms(&matches), vec!["model", "machine learning"]);
}

#[test]
fn test_english_tokens_keep_text_order() {
    let table = english(&[("alpha", "一"), ("beta", "二"), ("gamma", "三")]);
    let strategy = MatchStrategy::word_boundary(&[]);

    let matches = find_terms("gamma, alpha; gamma beta", &table, &strategy);

    assert_eq!(terms(&matches), vec!["gamma", "alpha", "beta"]);
}

#[test]
fn test_korean_tokens_first_then_substrings() {
    let table = whole_row("ハングル", &[("서버", "サーバー"), ("네트워크", "ネットワーク")]);
    let strategy = MatchStrategy::WhitespaceTokens {
        strip: TOKEN_PUNCTUATION,
    };

    // "서버는" only contains 서버; the quoted "네트워크" is a token once stripped
    let matches = find_terms("서버는 (네트워크)에 연결 \"네트워크\"", &table, &strategy);

    assert_eq!(terms(&matches), vec!["네트워크", "서버"]);
    assert_eq!(matches[1].field("日本語"), Some("サーバー"));
}

#[test]
fn test_korean_matching_is_case_insensitive_for_latin_terms() {
    let table = whole_row("ハングル", &[("api", "API")]);
    let strategy = MatchStrategy::WhitespaceTokens {
        strip: TOKEN_PUNCTUATION,
    };

    let matches = find_terms("API를 호출", &table, &strategy);
    assert_eq!(terms(&matches), vec!["api"]);
}

#[test]
fn test_chinese_repeated_substring_matches_once() {
    let table = whole_row("中文", &[("服务器", "サーバー")]);

    let matches = find_terms("服务器和服务器集群", &table, &MatchStrategy::Substring);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].term, "服务器");
}

#[test]
fn test_chinese_matches_follow_glossary_order() {
    let table = whole_row("中文", &[("网络", "ネットワーク"), ("服务器", "サーバー")]);

    let matches = find_terms("服务器连接网络", &table, &MatchStrategy::Substring);

    assert_eq!(terms(&matches), vec!["网络", "服务器"]);
}

#[test]
fn test_empty_text_or_glossary_yields_nothing() {
    let table = english(&[("server", "サーバー")]);
    let strategy = MatchStrategy::word_boundary(&[]);

    assert!(find_terms("", &table, &strategy).is_empty());
    assert!(find_terms("server", &GlossaryTable::new(), &strategy).is_empty());
    assert!(find_terms("no terms here", &table, &strategy).is_empty());
}

#[test]
fn test_case_sensitive_term_absent_from_glossary_is_ignored() {
    let table = english(&[("operator", "演算子")]);
    let matches = find_terms("AND operator", &table, &default_english_strategy());

    assert_eq!(terms(&matches), vec!["operator"]);
}

#[test]
fn test_case_sensitive_term_with_symbol_edges() {
    let table = english(&[("c++", "シープラスプラス"), ("operator", "演算子")]);
    let strategy = MatchStrategy::word_boundary(&["C++".to_string()]);

    let matches = find_terms("I write C++ daily", &table, &strategy);
    assert_eq!(terms(&matches), vec!["C++"]);

    let matches = find_terms("operator overloading in C++", &table, &strategy);
    assert_eq!(terms(&matches), vec!["operator", "C++"]);

    assert!(find_terms("i write c++ daily", &table, &strategy).is_empty());
}
