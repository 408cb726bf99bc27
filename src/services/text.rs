use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use super::encoding::{self, DecodedText};

#[derive(Debug, Error)]
pub enum TextFileError {
    #[error("cannot read text file {path}: {source}")]
    NotReadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Reads a text file for the input area, whatever its encoding.
pub fn open_text_file(path: &Path) -> Result<DecodedText, TextFileError> {
    let bytes = fs::read(path).map_err(|e| TextFileError::NotReadable {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let decoded = encoding::decode(&bytes);
    log::info!("opened {} ({})", path.display(), decoded.encoding);
    Ok(decoded)
}
