//! Text sources, hashed as UTF-8

use super::buffer::hash_buffer;
use crate::{ChunkSize, DigestAlgorithm, HashError, HashResult, Result};
use tracing::debug;

/// Hash the UTF-8 bytes of `text`
#[must_use]
pub fn hash_text(text: &str, algorithm: DigestAlgorithm, chunk_size: ChunkSize) -> HashResult {
    hash_buffer(text.as_bytes(), algorithm, chunk_size)
}

/// Hash UTF-16 code units after transcoding them to UTF-8.
///
/// # Errors
///
/// Returns `HashError::Encoding` if `units` contains an unpaired surrogate,
/// which has no UTF-8 representation.
pub fn try_hash_wide_text(
    units: &[u16],
    algorithm: DigestAlgorithm,
    chunk_size: ChunkSize,
) -> Result<HashResult> {
    let text = String::from_utf16(units).map_err(|e| {
        debug!(len = units.len(), error = %e, "Text cannot be encoded as UTF-8");
        HashError::encoding(e.to_string())
    })?;
    Ok(hash_text(&text, algorithm, chunk_size))
}
