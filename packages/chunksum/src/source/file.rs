//! Local file sources
//!
//! The whole file is read into memory before hashing, so these adapters are
//! meant for local or low-latency files. Any read error aborts the computation.

use super::buffer::hash_buffer;
use crate::{ChunkSize, DigestAlgorithm, HashError, HashResult, Result};
use std::path::Path;
use tracing::debug;

/// Read `path` and hash its contents.
///
/// # Errors
///
/// Returns `HashError::Io` if the file cannot be read.
pub fn hash_file(
    path: impl AsRef<Path>,
    algorithm: DigestAlgorithm,
    chunk_size: ChunkSize,
) -> Result<HashResult> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| HashError::io(path, e))?;
    debug!(path = %path.display(), size = data.len(), %algorithm, "Hashing file");
    Ok(hash_buffer(&data, algorithm, chunk_size))
}

/// Read `path` without blocking the async runtime, then hash its contents.
///
/// # Errors
///
/// Returns `HashError::Io` if the file cannot be read.
pub async fn hash_file_async(
    path: impl AsRef<Path>,
    algorithm: DigestAlgorithm,
    chunk_size: ChunkSize,
) -> Result<HashResult> {
    let path = path.as_ref();
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| HashError::io(path, e))?;
    debug!(path = %path.display(), size = data.len(), %algorithm, "Hashing file");
    Ok(hash_buffer(&data, algorithm, chunk_size))
}
