//! Error types for node setup operations.
//!
//! Every operation is a one-shot command, so errors carry enough context
//! (usually the file path) to be printed as a single operator-facing line.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid base58 private key")]
    Decode(#[from] bs58::decode::Error),

    #[error("{} not found", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("{} has no `offset = <integer>` line", .0.display())]
    OffsetFieldMissing(PathBuf),

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a JSON byte array", .path.display())]
    KeypairFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} holds {len} bytes, need at least 32 to derive a public key", .path.display())]
    KeypairTooShort { path: PathBuf, len: usize },
}

impl SetupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetupError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using [`SetupError`].
pub type Result<T> = std::result::Result<T, SetupError>;
