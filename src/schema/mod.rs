//! Schema module - Configuration and pattern types for the simulation.

mod config;
mod pattern;

pub use config::*;
pub use pattern::*;
