//! Conway Lab - Toroidal Game of Life engine.
//!
//! This crate provides a double-buffered Game of Life grid whose edges wrap
//! around, together with two small companions: a Monte Carlo π estimator and
//! a generic directed graph with a depth-first path finder.
//!
//! # Architecture
//!
//! - `schema`: Configuration and seeding types
//! - `compute`: The automaton engine (neighbor counting, rule, grid, text format)
//! - `montecarlo`: π estimation from a uniform random source
//! - `graph`: Adjacency-set directed graph
//!
//! # Example
//!
//! ```rust,no_run
//! use conway_lab::{
//!     compute::{Grid, GridStats},
//!     schema::{LifeConfig, Seed},
//! };
//!
//! let config = LifeConfig::default();
//! let mut grid = Grid::from_seed(&Seed::default(), &config).unwrap();
//!
//! for _ in 0..config.generations {
//!     print!("{}", grid.render_with(config.alive_glyph, config.dead_glyph));
//!     grid.advance_generation();
//! }
//!
//! println!("Alive after {} generations: {}", grid.generation(), GridStats::from_grid(&grid).population);
//! ```

pub mod compute;
pub mod graph;
pub mod montecarlo;
pub mod schema;

// Re-export commonly used types
pub use compute::{Grid, GridStats, RandomInitializer};
pub use graph::{Graph, GraphError};
pub use schema::{LifeConfig, Pattern, Seed};
