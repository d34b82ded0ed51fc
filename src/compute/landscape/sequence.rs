//! Random sequence generation for candidate pools.

use rand::prelude::*;

use crate::schema::{ALPHABET, Sequence};

/// Random number generator wrapper for sequence generation.
pub struct SequenceRng {
    rng: StdRng,
}

impl SequenceRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate a sequence with each symbol drawn uniformly from [`ALPHABET`].
    pub fn random_sequence(&mut self, length: usize) -> Sequence {
        (0..length)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())])
            .collect::<Vec<_>>()
            .into()
    }

    /// Generate a pool of `size` sequences, each `length` symbols long.
    pub fn random_pool(&mut self, size: usize, length: usize) -> Vec<Sequence> {
        (0..size).map(|_| self.random_sequence(length)).collect()
    }
}

impl std::fmt::Debug for SequenceRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceRng").finish_non_exhaustive()
    }
}
