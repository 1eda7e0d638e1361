//! Algorithm-specific hash contexts

use crate::DigestAlgorithm;
use digest::Digest;

/// Incremental hash context driven by the engine
pub(crate) trait DigestState: Send {
    fn update(&mut self, data: &[u8]);
    /// Derive the digest. The context is left reset and must not be reused.
    fn finalize(&mut self) -> Vec<u8>;
}

// One monomorphized context per algorithm
struct CoreState<D>(D);

impl<D: Digest + Default + Send> DigestState for CoreState<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(&mut self) -> Vec<u8> {
        Digest::finalize(std::mem::take(&mut self.0)).to_vec()
    }
}

/// Allocate a fresh context for `algorithm`
pub(crate) fn create_state(algorithm: DigestAlgorithm) -> Box<dyn DigestState> {
    match algorithm {
        DigestAlgorithm::Md5 => Box::new(CoreState(md5::Md5::new())),
        DigestAlgorithm::Sha1 => Box::new(CoreState(sha1::Sha1::new())),
        DigestAlgorithm::Sha224 => Box::new(CoreState(sha2::Sha224::new())),
        DigestAlgorithm::Sha256 => Box::new(CoreState(sha2::Sha256::new())),
        DigestAlgorithm::Sha384 => Box::new(CoreState(sha2::Sha384::new())),
        DigestAlgorithm::Sha512 => Box::new(CoreState(sha2::Sha512::new())),
    }
}
