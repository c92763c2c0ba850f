//! Seed types for populating a fresh grid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::DEFAULT_LIVE_PROBABILITY;

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random {
                live_probability: DEFAULT_LIVE_PROBABILITY,
                seed: None,
            },
        }
    }
}

/// Ways to populate a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Plain-text grid file of `'1'` (alive) and other characters (dead).
    File {
        /// Path to the grid file.
        path: PathBuf,
    },
    /// Inline text grid, one string per row.
    Lines {
        /// Grid rows in the text format.
        lines: Vec<String>,
    },
    /// Uniform random fill.
    Random {
        /// Probability that a cell starts alive.
        live_probability: f64,
        /// Optional RNG seed (None = fresh entropy).
        seed: Option<u64>,
    },
    /// Sparse list of live cells.
    Cells {
        /// (row, col) entries. Out-of-range entries are skipped.
        cells: Vec<(usize, usize)>,
    },
}

impl Seed {
    /// Seed from a text grid file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            pattern: Pattern::File { path: path.into() },
        }
    }

    /// Seed from a sparse list of live cells.
    pub fn cells(cells: Vec<(usize, usize)>) -> Self {
        Self {
            pattern: Pattern::Cells { cells },
        }
    }

    /// Whether this seed draws from a random source.
    pub fn is_random(&self) -> bool {
        matches!(self.pattern, Pattern::Random { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_random() {
        let seed = Seed::default();
        assert!(seed.is_random());
    }

    #[test]
    fn test_tagged_json() {
        let json = r#"{ "pattern": { "type": "Cells", "cells": [[0, 1], [2, 3]] } }"#;
        let seed: Seed = serde_json::from_str(json).unwrap();
        assert_eq!(seed, Seed::cells(vec![(0, 1), (2, 3)]));

        let json = r#"{ "pattern": { "type": "File", "path": "matrix.txt" } }"#;
        let seed: Seed = serde_json::from_str(json).unwrap();
        assert_eq!(seed, Seed::file("matrix.txt"));
        assert!(!seed.is_random());
    }
}
