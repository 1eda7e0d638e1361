//! Fluent checksum API
//!
//! Usage: `Checksum::sha256().with_chunk_size(size).compute(data)`

pub mod checksum_builder;

pub use checksum_builder::ChecksumBuilder;

use crate::{ChecksumConfig, DigestAlgorithm};

/// Entry point for checksum operations
pub struct Checksum;

impl Checksum {
    /// Use MD5
    #[must_use]
    pub fn md5() -> ChecksumBuilder {
        ChecksumBuilder::new(DigestAlgorithm::Md5)
    }

    /// Use SHA-1
    #[must_use]
    pub fn sha1() -> ChecksumBuilder {
        ChecksumBuilder::new(DigestAlgorithm::Sha1)
    }

    /// Use SHA-224
    #[must_use]
    pub fn sha224() -> ChecksumBuilder {
        ChecksumBuilder::new(DigestAlgorithm::Sha224)
    }

    /// Use SHA-256
    #[must_use]
    pub fn sha256() -> ChecksumBuilder {
        ChecksumBuilder::new(DigestAlgorithm::Sha256)
    }

    /// Use SHA-384
    #[must_use]
    pub fn sha384() -> ChecksumBuilder {
        ChecksumBuilder::new(DigestAlgorithm::Sha384)
    }

    /// Use SHA-512
    #[must_use]
    pub fn sha512() -> ChecksumBuilder {
        ChecksumBuilder::new(DigestAlgorithm::Sha512)
    }

    /// Use an algorithm chosen at runtime
    #[must_use]
    pub fn with_algorithm(algorithm: DigestAlgorithm) -> ChecksumBuilder {
        ChecksumBuilder::new(algorithm)
    }

    /// Use the algorithm and chunk size from `config`
    #[must_use]
    pub fn from_config(config: &ChecksumConfig) -> ChecksumBuilder {
        ChecksumBuilder::from_config(config)
    }
}
