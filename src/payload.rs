//! Random payload generation for upload probes
//!
//! Upload chunks must be incompressible so intermediate proxies and the
//! sink endpoint cannot shortcut the transfer. The buffer is filled in
//! bounded slices; some random sources cap a single fill call (the
//! browser's crypto API stops at 64 KiB), and matching that granularity
//! here keeps the generator's behavior uniform across adapters.

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Maximum bytes filled per RNG call
const FILL_CHUNK_SIZE: usize = 65_536;

/// Generates random upload payloads of arbitrary size
#[derive(Debug)]
pub struct PayloadGenerator {
    rng: StdRng,
}

impl PayloadGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Produce `size` random bytes, filling in bounded internal chunks
    pub fn generate(&mut self, size: usize) -> Bytes {
        let mut buffer = vec![0u8; size];
        for chunk in buffer.chunks_mut(FILL_CHUNK_SIZE) {
            self.rng.fill_bytes(chunk);
        }
        Bytes::from(buffer)
    }
}

impl Default for PayloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_sizes() {
        let mut generator = PayloadGenerator::new();
        for size in [0, 1, 1_000, FILL_CHUNK_SIZE, FILL_CHUNK_SIZE + 1, 300_000] {
            assert_eq!(generator.generate(size).len(), size);
        }
    }

    #[test]
    fn test_payload_is_not_constant() {
        let mut generator = PayloadGenerator::new();
        let payload = generator.generate(100_000);
        let first = payload[0];
        // A run of 100k identical bytes from a healthy RNG is implausible
        assert!(payload.iter().any(|&b| b != first));
    }

    #[test]
    fn test_consecutive_payloads_differ() {
        let mut generator = PayloadGenerator::new();
        let a = generator.generate(10_000);
        let b = generator.generate(10_000);
        assert_ne!(a, b);
    }
}
