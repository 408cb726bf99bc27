use serde::Serialize;
use std::path::{Path, PathBuf};

use super::store::GlossaryStore;
use crate::model::language::LanguageCode;
use crate::model::settings::Settings;

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub loaded: Vec<LanguageCode>,
    pub missing: Vec<LanguageCode>,
}

/// Directories searched for glossary files, in priority order.
pub fn search_dirs(settings: &Settings) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = settings.search_dirs.iter().map(PathBuf::from).collect();

    if settings.search_exe_dir {
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
        {
            dirs.push(exe_dir.join("resources"));
            dirs.push(exe_dir.join("..").join("resources"));
        }
    }

    dirs
}

pub fn candidate_paths(dirs: &[PathBuf], file_name: &str) -> Vec<PathBuf> {
    dirs.iter().map(|d| d.join(file_name)).collect()
}

/// Loads, for every language with a configured file name, the first
/// candidate file that loads successfully.
pub fn discover(store: &mut GlossaryStore, settings: &Settings) -> DiscoveryReport {
    let dirs = search_dirs(settings);
    discover_in(store, settings, &dirs)
}

pub fn discover_in(
    store: &mut GlossaryStore,
    settings: &Settings,
    dirs: &[PathBuf],
) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();
    let languages: Vec<LanguageCode> = store.languages().collect();

    for language in languages {
        let Some(file_name) = settings.glossary_files.get(&language) else {
            report.missing.push(language);
            continue;
        };

        let loaded = candidate_paths(dirs, file_name)
            .iter()
            .filter(|p| p.is_file())
            .any(|p| store.load_glossary(p, language).is_ok());

        if loaded {
            report.loaded.push(language);
        } else {
            log::warn!("no loadable {} glossary named {}", language, file_name);
            report.missing.push(language);
        }
    }

    report
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
