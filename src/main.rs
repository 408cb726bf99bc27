#![windows_subsystem = "windows"]
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

use glossary_core::logging;
use glossary_core::protocol::{self, CoreState};
use glossary_core::services::glossary::discovery;
use glossary_core::services::settings;

fn main() {
    let (settings, settings_err) = settings::load();

    if let Err(e) = logging::init(&settings.log_level) {
        eprintln!("failed to initialize logger: {e}");
    }
    if let Some(e) = settings_err {
        log::warn!("using default settings: {e}");
    }

    let mut state = CoreState::new(settings);

    let report = discovery::discover(&mut state.store, &state.settings);
    if report.loaded.is_empty() {
        log::warn!("no glossary found at startup");
    } else {
        log::info!("glossaries ready: {:?}", report.loaded);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => continue,
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| protocol::handle(&mut state, &line)));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                log::error!("request panicked: {line}");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }
}
