//! Source adapters: buffers, text and files
//!
//! Each adapter feeds its source to a single [`DigestEngine`](crate::DigestEngine)
//! in non-overlapping slices of at most `chunk_size` bytes, finalizes once,
//! and hex-encodes the digest.

pub mod buffer;
pub mod file;
pub mod text;

pub use buffer::hash_buffer;
pub use file::{hash_file, hash_file_async};
pub use text::{hash_text, try_hash_wide_text};

use crate::{ChunkSize, DigestAlgorithm, Result};
use std::path::Path;

/// Hex digest of an in-memory buffer
#[must_use]
pub fn digest_buffer(data: &[u8], algorithm: DigestAlgorithm, chunk_size: ChunkSize) -> String {
    hash_buffer(data, algorithm, chunk_size).to_hex()
}

/// Hex digest of the UTF-8 bytes of `text`, using the default chunk size
#[must_use]
pub fn digest_text(text: &str, algorithm: DigestAlgorithm) -> String {
    digest_text_chunked(text, algorithm, ChunkSize::default())
}

/// Hex digest of the UTF-8 bytes of `text`
#[must_use]
pub fn digest_text_chunked(text: &str, algorithm: DigestAlgorithm, chunk_size: ChunkSize) -> String {
    hash_text(text, algorithm, chunk_size).to_hex()
}

/// Hex digest of UTF-16 text, or `None` if it cannot be encoded as UTF-8
#[must_use]
pub fn digest_wide_text(units: &[u16], algorithm: DigestAlgorithm) -> Option<String> {
    try_hash_wide_text(units, algorithm, ChunkSize::default())
        .ok()
        .map(|result| result.to_hex())
}

/// Hex digest of a local file.
///
/// # Errors
///
/// Returns `HashError::Io` if the file cannot be read.
pub fn digest_file(
    path: impl AsRef<Path>,
    algorithm: DigestAlgorithm,
    chunk_size: ChunkSize,
) -> Result<String> {
    hash_file(path, algorithm, chunk_size).map(|result| result.to_hex())
}

/// Hex digest of a local file, read asynchronously.
///
/// # Errors
///
/// Returns `HashError::Io` if the file cannot be read.
pub async fn digest_file_async(
    path: impl AsRef<Path>,
    algorithm: DigestAlgorithm,
    chunk_size: ChunkSize,
) -> Result<String> {
    hash_file_async(path, algorithm, chunk_size)
        .await
        .map(|result| result.to_hex())
}

/// Checksum methods on hashable sources
///
/// ```
/// use chunksum::{ChecksumExt, DigestAlgorithm};
///
/// assert_eq!(
///     "abc".checksum(DigestAlgorithm::Md5),
///     "900150983cd24fb0d6963f7d28e17f72"
/// );
/// ```
pub trait ChecksumExt {
    /// Hex digest, or a `Result` for fallible sources
    type Output;

    /// Digest with the default chunk size
    fn checksum(&self, algorithm: DigestAlgorithm) -> Self::Output {
        self.checksum_chunked(algorithm, ChunkSize::default())
    }

    /// Digest with an explicit chunk size
    fn checksum_chunked(&self, algorithm: DigestAlgorithm, chunk_size: ChunkSize) -> Self::Output;
}

impl ChecksumExt for [u8] {
    type Output = String;

    fn checksum_chunked(&self, algorithm: DigestAlgorithm, chunk_size: ChunkSize) -> String {
        digest_buffer(self, algorithm, chunk_size)
    }
}

impl ChecksumExt for str {
    type Output = String;

    fn checksum_chunked(&self, algorithm: DigestAlgorithm, chunk_size: ChunkSize) -> String {
        digest_text_chunked(self, algorithm, chunk_size)
    }
}

impl ChecksumExt for Path {
    type Output = Result<String>;

    fn checksum_chunked(&self, algorithm: DigestAlgorithm, chunk_size: ChunkSize) -> Result<String> {
        digest_file(self, algorithm, chunk_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_buffer_agree() {
        for algorithm in DigestAlgorithm::ALL {
            assert_eq!(
                digest_text("abc", algorithm),
                digest_buffer(b"abc", algorithm, ChunkSize::default())
            );
        }
    }

    #[test]
    fn hex_length_matches_algorithm() {
        for algorithm in DigestAlgorithm::ALL {
            let hex = digest_text("length check", algorithm);
            assert_eq!(hex.len(), algorithm.hex_len());
            assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn wide_text_with_lone_surrogate_is_absent() {
        assert_eq!(digest_wide_text(&[0xDC00], DigestAlgorithm::Sha256), None);
        let units: Vec<u16> = "abc".encode_utf16().collect();
        assert_eq!(
            digest_wide_text(&units, DigestAlgorithm::Sha256).as_deref(),
            Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn extension_trait_on_bytes_and_str() {
        let bytes: &[u8] = b"abc";
        assert_eq!(
            bytes.checksum(DigestAlgorithm::Sha1),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            "abc".checksum(DigestAlgorithm::Sha1),
            bytes.checksum(DigestAlgorithm::Sha1)
        );
    }
}
