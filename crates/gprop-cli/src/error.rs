use gprop_core::{ErrorCode, GraphError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Graph errors exit with their own code; everything else is internal.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Graph(err) => err.code().exit_code(),
            _ => ErrorCode::InternalError.exit_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
