//! Chunk size and checksum configuration

use crate::{DigestAlgorithm, HashError, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::debug;

/// Maximum number of bytes fed to the engine per update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    /// Default chunk size in bytes
    pub const DEFAULT_BYTES: usize = 4096;

    /// Create a chunk size.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidChunkSize` if `bytes` is zero.
    pub fn new(bytes: usize) -> Result<Self> {
        NonZeroUsize::new(bytes)
            .map(Self)
            .ok_or(HashError::InvalidChunkSize(bytes))
    }

    /// Chunk size in bytes
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(Self::DEFAULT_BYTES - 1))
    }
}

impl From<NonZeroUsize> for ChunkSize {
    fn from(bytes: NonZeroUsize) -> Self {
        Self(bytes)
    }
}

impl TryFrom<usize> for ChunkSize {
    type Error = HashError;

    fn try_from(bytes: usize) -> Result<Self> {
        Self::new(bytes)
    }
}

impl From<ChunkSize> for usize {
    fn from(chunk_size: ChunkSize) -> Self {
        chunk_size.get()
    }
}

/// Persistent defaults for checksum computation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumConfig {
    /// Algorithm used when the caller does not pick one
    #[serde(default = "default_algorithm")]
    pub algorithm: DigestAlgorithm,
    /// Bytes fed to the engine per update
    #[serde(default)]
    pub chunk_size: ChunkSize,
}

fn default_algorithm() -> DigestAlgorithm {
    DigestAlgorithm::Sha256
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            chunk_size: ChunkSize::default(),
        }
    }
}

impl ChecksumConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Configuration` if the JSON is malformed, names an
    /// unknown algorithm, or sets a zero chunk size.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HashError::Configuration(e.to_string()))
    }

    /// Load a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Io` if the file cannot be read and
    /// `HashError::Configuration` if its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| HashError::io(path, e))?;
        let config = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            algorithm = %config.algorithm,
            chunk_size = config.chunk_size.get(),
            "Loaded checksum configuration"
        );
        Ok(config)
    }

    /// Serialize the configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Configuration` if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| HashError::Configuration(e.to_string()))
    }
}
