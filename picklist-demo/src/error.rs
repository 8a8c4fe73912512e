use std::io;
use std::path::PathBuf;

use picklist::OptionValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unknown log level {0:?}")]
    LogLevel(String),

    #[error("initial value {0} is not among the options")]
    UnknownInitial(OptionValue),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
