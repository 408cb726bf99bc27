use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read glossary file {path}: {source}")]
    FileNotReadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("glossary file is empty or malformed: {0}")]
    EmptyOrMalformedCsv(String),

    #[error("glossary header is missing required columns: {}", .0.join(", "))]
    MissingRequiredColumns(Vec<String>),

    #[error("unsupported language code: {0}")]
    UnsupportedLanguageCode(String),
}
