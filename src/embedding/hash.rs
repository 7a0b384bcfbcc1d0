//! Hash-seeded placeholder embedder.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::embedding::embedder::TextEmbedder;
use crate::embedding::similarity::l2_normalize;
use crate::error::Result;

/// Default embedding dimension.
pub const DEFAULT_DIMENSION: usize = 256;

/// A deterministic stand-in embedding provider.
///
/// Seeds a PRNG from a stable hash of the input text and draws a uniform
/// vector, then L2-normalizes it. The output is deterministic across
/// process restarts but carries no semantic signal beyond self-equality;
/// it exists so the scoring pipeline is exercised end-to-end until a
/// model-backed [`TextEmbedder`] is wired in behind the same trait.
#[derive(Clone, Debug)]
pub struct HashEmbedder {
    dimension: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl HashEmbedder {
    /// Create a new hash embedder with the default dimension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new hash embedder with a custom dimension.
    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Stable 64-bit hash of the text.
    ///
    /// Keyed hashers reseed per process, which would break vector
    /// comparability across restarts, so this uses a fixed multiplier.
    fn stable_hash(text: &str) -> u64 {
        let mut hash = 0u64;
        for byte in text.bytes() {
            hash = hash.wrapping_mul(31).wrapping_add(byte as u64);
        }
        hash
    }
}

impl TextEmbedder for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let seed = Self::stable_hash(text) % 1_000_000;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut vector: Vec<f32> = (0..self.dimension).map(|_| rng.random::<f32>()).collect();
        l2_normalize(&mut vector);
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &'static str {
        "hash"
    }
}
