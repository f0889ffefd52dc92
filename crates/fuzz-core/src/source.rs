//! Evaluation context threaded through every thunk.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random source handed to thunks when a pipeline is evaluated.
///
/// Seeding the source makes every pipeline evaluated against it
/// reproducible. `Source` implements [`RngCore`], so the full
/// [`rand::Rng`] API is available on it.
#[derive(Debug, Clone)]
pub struct Source {
    rng: StdRng,
    seed: Option<u64>,
}

impl Source {
    /// Create a deterministic source.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this source was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
