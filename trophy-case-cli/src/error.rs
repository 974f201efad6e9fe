use thiserror::Error;

use trophy_case_core::types::GameId;
use trophy_case_data::DataError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Site data file failed to load
    #[error("{0}")]
    Data(#[from] DataError),

    /// Game id not present in the data file
    #[error("Unknown game id: {0}")]
    UnknownGame(GameId),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// JSON output failed to serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
