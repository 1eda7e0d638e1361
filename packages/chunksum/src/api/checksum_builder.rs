//! Checksum builder carrying an algorithm and chunk size

use crate::source::{hash_buffer, hash_file, hash_file_async, hash_text, try_hash_wide_text};
use crate::{ChecksumConfig, ChunkSize, DigestAlgorithm, DigestEngine, HashResult, Result};
use std::path::Path;

/// Checksum builder for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumBuilder {
    algorithm: DigestAlgorithm,
    chunk_size: ChunkSize,
}

impl ChecksumBuilder {
    /// Create a builder with the default chunk size
    #[must_use]
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            chunk_size: ChunkSize::default(),
        }
    }

    /// Create a builder from persisted configuration
    #[must_use]
    pub fn from_config(config: &ChecksumConfig) -> Self {
        Self {
            algorithm: config.algorithm,
            chunk_size: config.chunk_size,
        }
    }

    /// Override the chunk size
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: ChunkSize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Selected algorithm
    #[must_use]
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Selected chunk size
    #[must_use]
    pub fn chunk_size(&self) -> ChunkSize {
        self.chunk_size
    }

    /// Fresh engine for incremental use
    #[must_use]
    pub fn engine(&self) -> DigestEngine {
        DigestEngine::new(self.algorithm)
    }

    /// Compute the digest of an in-memory buffer
    #[must_use]
    pub fn compute<T: AsRef<[u8]>>(&self, data: T) -> HashResult {
        hash_buffer(data.as_ref(), self.algorithm, self.chunk_size)
    }

    /// Compute the digest of the UTF-8 bytes of `text`
    #[must_use]
    pub fn compute_text(&self, text: &str) -> HashResult {
        hash_text(text, self.algorithm, self.chunk_size)
    }

    /// Compute the digest of UTF-16 text, or `None` if it cannot be encoded
    #[must_use]
    pub fn compute_wide_text(&self, units: &[u16]) -> Option<HashResult> {
        try_hash_wide_text(units, self.algorithm, self.chunk_size).ok()
    }

    /// Compute the digest of a local file.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Io` if the file cannot be read.
    pub fn compute_file(&self, path: impl AsRef<Path>) -> Result<HashResult> {
        hash_file(path, self.algorithm, self.chunk_size)
    }

    /// Compute the digest of a local file, reading it asynchronously.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Io` if the file cannot be read.
    pub async fn compute_file_async(&self, path: impl AsRef<Path>) -> Result<HashResult> {
        hash_file_async(path, self.algorithm, self.chunk_size).await
    }
}

impl Default for ChecksumBuilder {
    fn default() -> Self {
        Self::from_config(&ChecksumConfig::default())
    }
}
