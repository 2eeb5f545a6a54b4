//! Logger setup from the `[logging]` configuration section.

use zoo::domain::config::LoggingConfig;
use zoo_logger::{Logger, LoggerError, parse_level};

/// Log file prefix.
pub const LOG_NAME: &str = "zoo";

/// Installs the global logger.
///
/// Returns `None` when both console and file output are switched off.
///
/// # Errors
/// Returns [`LoggerError`] for an unknown level or bad filter directives, and
/// when the log directory or subscriber cannot be set up.
pub fn init(cfg: &LoggingConfig) -> Result<Option<Logger>, LoggerError> {
    let builder = Logger::builder(LOG_NAME)
        .level(parse_level(&cfg.level)?)
        .directives(cfg.filter.clone())
        .console(cfg.console);

    match &cfg.directory {
        Some(dir) => builder.files(dir).keep(cfg.max_files).json(cfg.json).init().map(Some),
        None if cfg.console => builder.init().map(Some),
        None => Ok(None),
    }
}
