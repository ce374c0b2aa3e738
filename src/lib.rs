//! Toroidal Game of Life simulation kernel.
//!
//! This crate provides the state and update machinery for a Conway's Game
//! of Life variant on a toroidal grid: the classic B3/S23 rule, a decaying
//! per-cell "seed" overlay that highlights recent births, and pattern
//! stamping with four-way rotational orientation.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, patterns and orientation types
//! - `compute`: Grid state, transition rule, tick backends, view mapping
//!
//! # Example
//!
//! ```rust
//! use torus_life::{
//!     compute::Simulation,
//!     schema::{Orientation, Pattern, SimConfig},
//! };
//!
//! let config = SimConfig {
//!     rows: 50,
//!     cols: 50,
//!     ..SimConfig::default()
//! };
//!
//! let mut sim = Simulation::new(config).unwrap();
//! sim.set_pattern(Pattern::glider());
//! sim.set_orientation(Orientation::Up);
//! sim.place_pattern((10, 10)).unwrap();
//!
//! // Advance the world by one generation per external clock tick.
//! sim.tick();
//!
//! println!("live cells after 1 tick: {}", sim.grid().live_cells().count());
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Grid, ParallelBackend, SequentialBackend, SimStats, Simulation, Viewport};
pub use schema::{Orientation, Pattern, PatternBuffer, SimConfig};
