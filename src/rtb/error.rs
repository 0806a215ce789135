use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RtbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Error opening log file {}: {source}", .path.display())]
    LogFileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown sink kind: {0}")]
    UnknownSinkKind(String),

    #[error("Unknown color mode: {0}")]
    UnknownColorMode(String),

    #[error("Unknown parameter type: {0}")]
    UnknownParamType(String),

    #[error("Invalid parameter spec (expected NAME:TYPE): {0}")]
    InvalidParamSpec(String),
}

pub type Result<T> = std::result::Result<T, RtbError>;
