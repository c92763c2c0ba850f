//! Configuration types for Game of Life runs.

use serde::{Deserialize, Serialize};

/// Default side length of the square grid.
pub const DEFAULT_DIMENSION: usize = 30;

/// Default probability that a randomly initialized cell starts alive.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.5;

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Side length of the toroidal grid in cells.
    pub dimension: usize,
    /// Probability (0.0-1.0) that a cell starts alive under random seeding.
    pub live_probability: f64,
    /// Number of generations the CLI advances by default.
    pub generations: u64,
    /// Glyph rendered for live cells.
    pub alive_glyph: char,
    /// Glyph rendered for dead cells.
    pub dead_glyph: char,
    /// Optional RNG seed for reproducible random initialization.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            live_probability: DEFAULT_LIVE_PROBABILITY,
            generations: 10,
            alive_glyph: 'x',
            dead_glyph: ' ',
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Total number of cells (dimension * dimension), saturating on overflow.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.dimension.saturating_mul(self.dimension)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimension(self.dimension)?;
        validate_probability(self.live_probability)?;
        if self.alive_glyph == self.dead_glyph {
            return Err(ConfigError::IndistinctGlyphs(self.alive_glyph));
        }
        Ok(())
    }
}

/// Check that a square grid of this side length can be allocated.
///
/// Returns the total cell count.
pub fn validate_dimension(dimension: usize) -> Result<usize, ConfigError> {
    if dimension == 0 {
        return Err(ConfigError::InvalidDimension);
    }
    dimension
        .checked_mul(dimension)
        .ok_or(ConfigError::DimensionTooLarge(dimension))
}

/// Check that a live probability lies in [0, 1].
pub fn validate_probability(p: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability(p))
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Grid dimension must be non-zero")]
    InvalidDimension,
    #[error("Grid dimension {0} is too large: cell count overflows")]
    DimensionTooLarge(usize),
    #[error("Live probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("Alive and dead glyphs must differ (both are {0:?})")]
    IndistinctGlyphs(char),
}
