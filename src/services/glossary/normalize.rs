/// Characters stripped from both ends of whitespace tokens before lookup.
pub const TOKEN_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ':', ';', '"', '\'', '(', ')', '[', ']', '{', '}', '<', '>',
];

/// Canonical form of a glossary key: trimmed and lower-cased.
pub fn normalize_term(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn strip_punctuation<'a>(token: &'a str, chars: &[char]) -> &'a str {
    token.trim_matches(|c| chars.contains(&c))
}

/// Splits text into runs of word characters (letters, digits, `_`).
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c)).filter(|t| !t.is_empty())
}

/// Word characters as in `\w`: letters, digits and `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
