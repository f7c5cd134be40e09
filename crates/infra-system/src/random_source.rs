// Random source adapters
// reason: rand for uniform sampling; seeded variant makes runs reproducible
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use queuesim_core::port::RandomSource;

/// Thread-local RNG per draw (production default)
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic RNG shared by every loop
///
/// Two sources built from the same seed yield the same sample stream; in
/// concurrent mode the interleaving of loops still decides who gets which
/// sample.
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
    seed: u64,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        debug!(seed, "Seeded random source created");
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandomSource {
    fn next_unit(&self) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen::<f64>()
    }
}
