use log::LevelFilter;
use std::time::SystemTime;

pub fn level_from_str(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Routes log records to stderr; stdout is reserved for protocol responses.
pub fn init(level: &str) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_millis(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level_from_str(level))
        .chain(std::io::stderr())
        .apply()
}
