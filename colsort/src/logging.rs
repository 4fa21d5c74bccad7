//! Log setup. Clicks are reported at debug level, listener failures at
//! error level (see `tabledom::Document::dispatch`).

use std::fs::File;
use std::path::Path;

use simplelog::{Config, WriteLogger};

pub use simplelog::LevelFilter;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to create log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("A logger is already installed: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

/// Install a global logger writing to the file at `path` (truncated).
pub fn init_file(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let log_file = File::create(path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}
