//! Jitter source implementations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::models::{JitterMode, ScoringConfig};
use crate::domain::ports::JitterSource;

/// Fresh thread-local randomness on every sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn sample(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible sequence from a fixed seed.
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn sample(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random::<f64>()
    }
}

/// Always returns the same value, clamped to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(f64);

impl FixedJitter {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Pinned to the middle of the jitter range.
    pub fn midpoint() -> Self {
        Self(0.5)
    }
}

impl JitterSource for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}

/// Build the jitter source a scoring configuration asks for.
///
/// `seeded` without a seed falls back to seed 0.
pub fn jitter_from_config(config: &ScoringConfig) -> Arc<dyn JitterSource> {
    match config.jitter {
        JitterMode::Random => Arc::new(ThreadRngJitter),
        JitterMode::Seeded => Arc::new(SeededJitter::new(config.seed.unwrap_or(0))),
        JitterMode::None => Arc::new(FixedJitter::midpoint()),
    }
}
