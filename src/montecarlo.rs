//! Monte Carlo estimation of π.
//!
//! Points are drawn uniformly from the square [-1, 1) x [-1, 1). The unit
//! circle covers π/4 of that square, so four times the fraction of points
//! landing inside it approximates π.

use std::num::{NonZeroU64, ParseIntError};

use log::debug;
use rand::Rng;
use rand::distributions::Standard;

/// Sample count parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum PiError {
    #[error("Sample count must be a positive integer, got {value:?}: {source}")]
    InvalidSampleCount {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Sample count must be greater than zero")]
    ZeroSamples,
}

/// Parse a command-line sample count.
pub fn parse_sample_count(arg: &str) -> Result<NonZeroU64, PiError> {
    let value: u64 = arg
        .trim()
        .parse()
        .map_err(|source| PiError::InvalidSampleCount {
            value: arg.to_owned(),
            source,
        })?;
    NonZeroU64::new(value).ok_or(PiError::ZeroSamples)
}

/// Estimate π from `samples` random points drawn from `rng`.
pub fn estimate_pi<R: Rng + ?Sized>(samples: NonZeroU64, rng: &mut R) -> f64 {
    let mut hits = 0u64;
    for _ in 0..samples.get() {
        let x: f64 = rng.sample::<f64, _>(Standard) * 2.0 - 1.0;
        let y: f64 = rng.sample::<f64, _>(Standard) * 2.0 - 1.0;
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }

    debug!("{} of {} samples inside the unit circle", hits, samples);
    4.0 * (hits as f64 / samples.get() as f64)
}
