use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;
use std::fs::{OpenOptions, create_dir_all};
use std::path::Path;

/// Maps a level name to a filter. Unknown names fall back to `Info`.
pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger.
///
/// Records are always appended to `log_file_path`. Stdout is only chained
/// when `to_stdout` is set, so status output printed by the binaries stays
/// readable.
pub fn init_logger(
    log_level: &str,
    log_file_path: &str,
    to_stdout: bool,
) -> Result<(), fern::InitError> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_dir_all(parent)?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level_str,
                record.target(),
                message
            ))
        })
        .level(parse_level(log_level))
        .chain(log_file);

    if to_stdout {
        dispatch = dispatch.chain(std::io::stdout());
    }

    dispatch.apply()?;
    Ok(())
}
