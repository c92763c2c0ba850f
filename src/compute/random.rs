//! Random grid initialization.

use rand::prelude::*;

use crate::schema::{ConfigError, DEFAULT_LIVE_PROBABILITY, LifeConfig, validate_probability};

use super::Grid;

/// Seedable random source for populating grids.
pub struct RandomInitializer {
    rng: StdRng,
    live_probability: f64,
}

impl RandomInitializer {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::random(),
        }
    }

    /// Create from the seed and live probability in `config`.
    pub fn from_config(config: &LifeConfig) -> Result<Self, ConfigError> {
        Self::from_seed_option(config.seed).with_live_probability(config.live_probability)
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            live_probability: DEFAULT_LIVE_PROBABILITY,
        }
    }

    /// Set the probability that a cell starts alive.
    pub fn with_live_probability(mut self, live_probability: f64) -> Result<Self, ConfigError> {
        validate_probability(live_probability)?;
        self.live_probability = live_probability;
        Ok(self)
    }

    pub fn live_probability(&self) -> f64 {
        self.live_probability
    }

    /// Underlying generator, for callers that need further draws.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Replace every cell of `grid` with a fresh random draw.
    pub fn populate(&mut self, grid: &mut Grid) {
        grid.generate_random(&mut self.rng, self.live_probability);
    }
}
