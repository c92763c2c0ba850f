//! Grid state - double-buffered toroidal Game of Life board.
//!
//! A [`Grid`] owns two equally shaped cell buffers: `current`, the visible
//! generation, and `next`, the successor computed from it. Every operation
//! that changes `current` recomputes `next` before returning, so the two are
//! always consistent when observed from outside.

use std::fmt;

use log::{debug, info, warn};
use rand::Rng;
use rand::distributions::Standard;

use crate::schema::{ConfigError, LifeConfig, Pattern, Seed, validate_dimension};

use super::serializer::{self, ALIVE_DIGIT, DEAD_DIGIT, LoadError};
use super::{RandomInitializer, live_neighbors, next_state};

/// Toroidal Game of Life grid.
///
/// Cells are stored row-major: index `row * dimension + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    current: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty(crate::schema::DEFAULT_DIMENSION)
    }
}

impl Grid {
    /// Create an all-dead grid of `dimension x dimension` cells.
    pub fn new(dimension: usize) -> Result<Self, ConfigError> {
        validate_dimension(dimension)?;
        Ok(Self::empty(dimension))
    }

    /// Callers must have checked `dimension` with `validate_dimension`.
    fn empty(dimension: usize) -> Self {
        let size = dimension * dimension;
        Self {
            dimension,
            current: vec![false; size],
            next: vec![false; size],
            generation: 0,
        }
    }

    /// Create a grid sized by `config` and populated from `seed`.
    ///
    /// A `Pattern::Random` seed keeps its own live probability. When it has no
    /// RNG seed of its own, `config.seed` is used instead.
    pub fn from_seed(seed: &Seed, config: &LifeConfig) -> Result<Self, SeedError> {
        config.validate()?;
        let mut grid = Self::empty(config.dimension);

        match &seed.pattern {
            Pattern::File { path } => serializer::load_file(&mut grid, path)?,
            Pattern::Lines { lines } => grid.load_from_text(lines),
            Pattern::Random {
                live_probability,
                seed,
            } => {
                let mut init = RandomInitializer::from_seed_option((*seed).or(config.seed))
                    .with_live_probability(*live_probability)?;
                init.populate(&mut grid);
            }
            Pattern::Cells { cells } => {
                for &(row, col) in cells {
                    if row < grid.dimension && col < grid.dimension {
                        let idx = grid.idx(row, col);
                        grid.current[idx] = true;
                    }
                }
                grid.compute_next_generation();
            }
        }

        Ok(grid)
    }

    /// Side length of the grid.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of generations advanced since the grid was last populated.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Convert (row, col) to a flat index, wrapping both coordinates.
    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        (row % self.dimension) * self.dimension + col % self.dimension
    }

    /// Whether the cell at (row, col) is alive in the current generation.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.current[self.idx(row, col)]
    }

    /// Whether the cell at (row, col) will be alive in the next generation.
    #[inline]
    pub fn get_next(&self, row: usize, col: usize) -> bool {
        self.next[self.idx(row, col)]
    }

    /// Current generation as a flat row-major view.
    pub fn current(&self) -> &[bool] {
        &self.current
    }

    /// Precomputed next generation as a flat row-major view.
    pub fn next(&self) -> &[bool] {
        &self.next
    }

    /// Owned copy of the current generation, one `Vec` per row.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.current
            .chunks(self.dimension)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    /// True when the next generation equals the current one (a still life).
    pub fn is_stable(&self) -> bool {
        self.current == self.next
    }

    /// Set a single cell and refresh the next generation.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.idx(row, col);
        self.current[idx] = alive;
        self.compute_next_generation();
    }

    /// Populate the current generation from text rows.
    ///
    /// Only the first `dimension` rows and the first `dimension` characters of
    /// each row are read. `'1'` marks a live cell and any other character a
    /// dead one. Cells not covered by the input keep their previous state.
    pub fn load_from_text<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dimension = self.dimension;
        let mut unexpected = 0usize;
        let mut rows = 0usize;

        for (row, line) in lines.into_iter().take(dimension).enumerate() {
            for (col, ch) in line.as_ref().chars().take(dimension).enumerate() {
                if ch != ALIVE_DIGIT && ch != DEAD_DIGIT {
                    unexpected += 1;
                }
                self.current[row * dimension + col] = ch == ALIVE_DIGIT;
            }
            rows += 1;
        }

        if unexpected > 0 {
            warn!(
                "Grid text contained {} characters other than '{}'/'{}'; treated as dead",
                unexpected, ALIVE_DIGIT, DEAD_DIGIT
            );
        }

        self.generation = 0;
        self.compute_next_generation();
        info!(
            "Loaded {} rows into {}x{} grid ({} alive)",
            rows,
            dimension,
            dimension,
            self.population()
        );
    }

    /// Fill every cell from `rng`: alive iff a uniform [0, 1) draw is below
    /// `live_probability`. Cells are drawn in row-major order.
    pub fn generate_random<R: Rng + ?Sized>(&mut self, rng: &mut R, live_probability: f64) {
        for cell in self.current.iter_mut() {
            let draw: f64 = rng.sample(Standard);
            *cell = draw < live_probability;
        }

        self.generation = 0;
        self.compute_next_generation();
        info!(
            "Randomly populated {}x{} grid with p={} ({} alive)",
            self.dimension,
            self.dimension,
            live_probability,
            self.population()
        );
    }

    /// Recompute `next` from `current`. Never touches `current`.
    pub fn compute_next_generation(&mut self) {
        let dimension = self.dimension;
        let current = &self.current;

        for (i, cell) in self.next.iter_mut().enumerate() {
            let neighbors = live_neighbors(current, dimension, i / dimension, i % dimension);
            *cell = next_state(current[i], neighbors);
        }
    }

    /// Make the precomputed successor the current generation, then refresh `next`.
    pub fn advance_generation(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.compute_next_generation();
        self.generation += 1;
        debug!(
            "Generation {}: {} alive",
            self.generation,
            self.population()
        );
    }

    /// Advance `generations` times.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance_generation();
        }
    }

    /// Render the current generation with `'x'` for live and `' '` for dead cells.
    pub fn render(&self) -> String {
        self.render_with('x', ' ')
    }

    /// Render the current generation with custom glyphs.
    ///
    /// Produces `dimension` newline-terminated lines of `dimension` glyphs.
    pub fn render_with(&self, alive: char, dead: char) -> String {
        let mut out = String::with_capacity(self.dimension * (self.dimension + 1));
        for row in self.current.chunks(self.dimension) {
            out.extend(row.iter().map(|&a| if a { alive } else { dead }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Errors raised while building a grid from a seed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Summary statistics for a grid generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStats {
    pub generation: u64,
    pub population: usize,
    pub live_fraction: f64,
    pub stable: bool,
}

impl GridStats {
    pub fn from_grid(grid: &Grid) -> Self {
        let population = grid.population();
        Self {
            generation: grid.generation(),
            population,
            live_fraction: population as f64 / grid.current().len() as f64,
            stable: grid.is_stable(),
        }
    }
}
