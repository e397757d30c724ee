//! Uniform random rotation.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::selector::{CandidateList, Rotation, UserAgent};

/// Uniform random selector.
/// Owns its generator so runs can be replayed from a seed.
#[derive(Debug)]
pub struct UniformRandom {
    rng: Mutex<StdRng>,
}

impl UniformRandom {
    /// Seed from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng: Mutex::new(rng) }
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Rotation for UniformRandom {
    fn next_value<'a>(&self, candidates: &'a CandidateList) -> &'a UserAgent {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let picked = candidates.choose(&mut *rng);
        tracing::debug!(user_agent = %picked, "Selected random User-Agent");
        picked
    }
}
