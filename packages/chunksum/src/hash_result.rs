//! Finalized digest with encoding and verification support

use crate::{DigestAlgorithm, HashError, Result};
use subtle::ConstantTimeEq;

/// Digest produced by a finalized engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    algorithm: DigestAlgorithm,
    bytes: Vec<u8>,
}

impl HashResult {
    pub(crate) fn new(algorithm: DigestAlgorithm, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.digest_len());
        Self { algorithm, bytes }
    }

    /// Algorithm that produced this digest
    #[must_use]
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex, two characters per byte, no prefix or separators
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Get the digest as a standard base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Get the length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the digest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Compare against an expected hex digest in constant time.
    ///
    /// Hex case is ignored.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidHex` if `expected` is not hex, and
    /// `HashError::VerificationFailed` if the digests differ.
    pub fn verify_hex(&self, expected: &str) -> Result<()> {
        let expected = hex::decode(expected.trim())?;
        self.verify(&expected)
    }

    /// Compare against expected digest bytes in constant time.
    ///
    /// # Errors
    ///
    /// Returns `HashError::VerificationFailed` if the digests differ.
    pub fn verify(&self, expected: &[u8]) -> Result<()> {
        if bool::from(self.bytes.as_slice().ct_eq(expected)) {
            Ok(())
        } else {
            Err(HashError::VerificationFailed)
        }
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.bytes
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
