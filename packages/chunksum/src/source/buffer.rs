//! In-memory buffer source

use crate::{ChunkSize, DigestAlgorithm, DigestEngine, HashResult};

/// Hash `data` in sequential slices of at most `chunk_size` bytes
#[must_use]
pub fn hash_buffer(data: &[u8], algorithm: DigestAlgorithm, chunk_size: ChunkSize) -> HashResult {
    let mut engine = DigestEngine::new(algorithm);
    for chunk in data.chunks(chunk_size.get()) {
        engine.update(chunk);
    }
    engine.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;

    #[test]
    fn chunk_boundaries_do_not_affect_digest() -> Result<()> {
        let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        for algorithm in DigestAlgorithm::ALL {
            let expected = hash_buffer(&data, algorithm, ChunkSize::new(data.len())?);
            for size in [1, 63, 64, 65, 4095, 4096, 4097, 20_000] {
                assert_eq!(
                    hash_buffer(&data, algorithm, ChunkSize::new(size)?),
                    expected,
                    "{algorithm} with chunk size {size}"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn empty_buffer_is_valid_input() {
        let result = hash_buffer(&[], DigestAlgorithm::Sha1, ChunkSize::default());
        assert_eq!(result.to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }
}
