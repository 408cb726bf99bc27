use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::settings::Settings;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

fn settings_dir() -> PathBuf {
    if let Ok(local) = std::env::var("LOCALAPPDATA") {
        return PathBuf::from(local).join("SearchGlossary");
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn settings_path() -> PathBuf {
    settings_dir().join(SETTINGS_FILE)
}

/// Loads settings from the default location, falling back to defaults.
///
/// Returns the problem alongside the defaults so it can be logged once the
/// logger (configured from these very settings) is up.
pub fn load() -> (Settings, Option<SettingsError>) {
    let path = settings_path();
    if !path.exists() {
        return (Settings::default(), None);
    }

    match load_from_path(&path) {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    }
}

pub fn load_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let data = fs::read_to_string(path).map_err(|e| SettingsError::Read {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    serde_json::from_str::<Settings>(&data).map_err(|e| SettingsError::Parse {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
