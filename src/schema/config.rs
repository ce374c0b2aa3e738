//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Seed overlay ticks granted to a cell born by reproduction.
fn default_seed_grant() -> u32 {
    20
}

/// Seed overlay ticks granted to the initial marks at world setup.
///
/// Larger than the per-birth grant so the starting marks stay visible while
/// the first structures form. Purely cosmetic; no simulation logic depends
/// on the ratio between the two constants.
fn default_initial_seed() -> u32 {
    120
}

fn default_backend() -> BackendKind {
    BackendKind::Parallel
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Seed overlay ticks granted on each reproduction birth.
    #[serde(default = "default_seed_grant")]
    pub seed_grant: u32,
    /// Seed overlay ticks granted to each initial mark.
    #[serde(default = "default_initial_seed")]
    pub initial_seed: u32,
    /// Cells marked with `initial_seed` overlay ticks at world setup.
    #[serde(default)]
    pub initial_marks: Vec<(usize, usize)>,
    /// Compute backend used for generation updates.
    #[serde(default = "default_backend")]
    pub backend: BackendKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 200,
            cols: 400,
            seed_grant: default_seed_grant(),
            initial_seed: default_initial_seed(),
            initial_marks: Vec::new(),
            backend: default_backend(),
        }
    }
}

/// Which compute backend drives the generation update.
///
/// Both variants satisfy the same double-buffer protocol and produce
/// bit-identical next generations; the choice only affects how the per-cell
/// evaluation is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Fixed row-major scan on the calling thread.
    Sequential,
    /// Data-parallel per-row evaluation via rayon.
    Parallel,
}

impl SimConfig {
    /// Get total grid size (rows * cols).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for &(row, col) in &self.initial_marks {
            if row >= self.rows || col >= self.cols {
                return Err(ConfigError::InvalidInitialMark { row, col });
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("initial mark ({row}, {col}) is outside the grid")]
    InvalidInitialMark { row: usize, col: usize },
}
