use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("roster is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("roster entry {id} is invalid: {reason}")]
    InvalidRecord { id: u32, reason: String },

    #[error("roster contains individual {0} more than once")]
    DuplicateId(u32),
}

pub type RosterResult<T> = Result<T, RosterError>;
