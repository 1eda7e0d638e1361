//! Chunked, bounded-memory digests over buffers, text and files
//!
//! Supports MD5, SHA-1, SHA-224, SHA-256, SHA-384 and SHA-512. Sources are fed
//! to a [`DigestEngine`] in slices of at most [`ChunkSize`] bytes (4096 by
//! default) and the digest is returned as lowercase hex.
//!
//! ```
//! use chunksum::{digest_text, Checksum, DigestAlgorithm};
//!
//! assert_eq!(
//!     digest_text("abc", DigestAlgorithm::Sha256),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! let digest = Checksum::md5().compute(b"");
//! assert_eq!(digest.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod hash_result;
pub mod source;

// Re-export error types
pub use error::{HashError, Result};

pub use algorithm::DigestAlgorithm;
pub use api::{Checksum, ChecksumBuilder};
pub use config::{ChecksumConfig, ChunkSize};
pub use engine::DigestEngine;
pub use hash_result::HashResult;
pub use source::{
    digest_buffer, digest_file, digest_file_async, digest_text, digest_text_chunked,
    digest_wide_text, ChecksumExt,
};
