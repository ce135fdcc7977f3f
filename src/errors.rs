use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed contact data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to save contacts to file {}: {source}", .path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row {} is out of range, there are {len} contacts", .index + 1)]
    OutOfRange { index: usize, len: usize },

    #[error("{0}")]
    Selection(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Validation failed: {0}")]
    Validation(String),
}
