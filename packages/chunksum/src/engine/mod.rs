//! Streaming digest engine
//!
//! A [`DigestEngine`] owns exactly one hash computation. Bytes are fed in any
//! number of [`DigestEngine::update`] calls and the digest is derived by
//! [`DigestEngine::finalize`]. Splitting input across updates never changes the
//! result, which is what lets the source adapters read in bounded chunks.
//!
//! The underlying context is finalized at most once. Later calls to
//! `finalize` return the cached digest, and updates after finalization are
//! ignored.

mod state;

use crate::{DigestAlgorithm, HashResult};
use state::{create_state, DigestState};
use tracing::{debug, trace, warn};

/// One in-flight digest computation
pub struct DigestEngine {
    algorithm: DigestAlgorithm,
    state: Box<dyn DigestState>,
    // Set exactly once; guards the context against a second finalize
    digest: Option<HashResult>,
    bytes_processed: u64,
}

impl DigestEngine {
    /// Create an engine with a freshly initialized context for `algorithm`
    #[must_use]
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        trace!(%algorithm, "Initializing digest engine");
        Self {
            algorithm,
            state: create_state(algorithm),
            digest: None,
            bytes_processed: 0,
        }
    }

    /// Algorithm this engine computes
    #[must_use]
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Feed `data` into the context.
    ///
    /// Has no effect once the engine is finalized.
    pub fn update(&mut self, data: &[u8]) {
        if self.digest.is_some() {
            warn!(
                algorithm = %self.algorithm,
                len = data.len(),
                "Ignoring update on finalized digest engine"
            );
            return;
        }

        self.state.update(data);
        self.bytes_processed += data.len() as u64;
        trace!(len = data.len(), total = self.bytes_processed, "Digest chunk processed");
    }

    /// Finalize the computation, returning the digest.
    ///
    /// The underlying context is consumed on the first call only; repeated
    /// calls return the same digest.
    pub fn finalize(&mut self) -> &HashResult {
        let Self {
            algorithm,
            state,
            digest,
            bytes_processed,
        } = self;

        if digest.is_some() {
            trace!(%algorithm, "Digest already finalized, returning cached value");
        }

        digest.get_or_insert_with(|| {
            debug!(%algorithm, bytes_processed = *bytes_processed, "Digest finalized");
            HashResult::new(*algorithm, state.finalize())
        })
    }

    /// Finalize and take ownership of the digest
    #[must_use]
    pub fn finish(mut self) -> HashResult {
        self.finalize().clone()
    }

    /// Digest, if the engine has been finalized
    #[must_use]
    pub fn digest(&self) -> Option<&HashResult> {
        self.digest.as_ref()
    }

    /// Lowercase hex digest, absent before finalization
    #[must_use]
    pub fn hex(&self) -> Option<String> {
        self.digest.as_ref().map(HashResult::to_hex)
    }

    /// Whether `finalize` has run
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.digest.is_some()
    }

    /// Total bytes fed through `update` before finalization
    #[must_use]
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }
}

impl std::fmt::Debug for DigestEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestEngine")
            .field("algorithm", &self.algorithm)
            .field("bytes_processed", &self.bytes_processed)
            .field("finalized", &self.is_finalized())
            .finish_non_exhaustive()
    }
}
