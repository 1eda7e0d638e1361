//! Error handling for checksum computation

use std::path::PathBuf;
use thiserror::Error;

/// Checksum-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// The source could not be read; no digest was produced.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Path of the unreadable source
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Text could not be converted to bytes.
    #[error("Text encoding error: {0}")]
    Encoding(String),

    /// Chunk sizes must be positive.
    #[error("Invalid chunk size: {0} (must be a positive integer)")]
    InvalidChunkSize(usize),

    /// The algorithm name is not one of the supported digests.
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// An expected digest string was not valid hex.
    #[error("Invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// A computed digest did not match the expected value.
    #[error("Hash verification failed")]
    VerificationFailed,

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl HashError {
    /// Create an I/O error for the given path
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an encoding error
    #[must_use]
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

/// Result type for checksum operations
pub type Result<T> = std::result::Result<T, HashError>;
