//! Generation stepper and the outward simulation facade.
//!
//! The stepper enforces the double-buffer protocol: each tick the backend
//! computes the next generation into a pre-allocated scratch buffer while
//! reading only the committed one, seeds are decayed and granted against
//! the generation being replaced, and the buffers swap at the commit
//! point. Readers only ever observe committed generations; `tick` is not
//! reentrant and no partial generation is ever visible.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::schema::{
    BackendKind, ConfigError, Orientation, Pattern, PatternBuffer, PatternError, SimConfig,
};

use super::{ALIVE, ComputeBackend, DEAD, Grid, ParallelBackend, SequentialBackend};

impl BackendKind {
    /// Instantiate the configured backend.
    pub fn create(self) -> Box<dyn ComputeBackend> {
        match self {
            BackendKind::Sequential => Box::new(SequentialBackend),
            BackendKind::Parallel => Box::new(ParallelBackend),
        }
    }
}

/// Drives one generation transition per `tick` over a borrowed [`Grid`].
pub struct Stepper {
    backend: Box<dyn ComputeBackend>,
    /// Scratch buffer for the in-progress next generation. Write-only for
    /// the backend; never read until it becomes current at the swap.
    next: Vec<super::CellState>,
    seed_grant: u32,
    tick: u64,
}

impl Stepper {
    /// Create a stepper sized for `grid`, stepping with `backend`.
    pub fn new(grid: &Grid, backend: Box<dyn ComputeBackend>, seed_grant: u32) -> Self {
        Self {
            next: vec![DEAD; grid.rows() * grid.cols()],
            backend,
            seed_grant,
            tick: 0,
        }
    }

    /// Ticks completed so far.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Name of the backend in use.
    #[inline]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Advance `grid` by one generation.
    ///
    /// Protocol: compute the full next generation from the committed
    /// buffer, decay every seed once, grant seeds where a birth occurred,
    /// then swap buffers and bump the tick counter. A birth is a
    /// dead-to-alive transition, which under B3/S23 only happens through
    /// reproduction.
    pub fn tick(&mut self, grid: &mut Grid) {
        let (rows, cols) = (grid.rows(), grid.cols());

        self.backend
            .compute_next_generation(grid.cells(), rows, cols, &mut self.next);

        // Seed decay and birth grants both apply to the generation being
        // replaced; net effect at a birth position is -1 then +grant.
        grid.decay_seeds();
        let mut births = 0usize;
        for idx in 0..rows * cols {
            if grid.cells()[idx] == DEAD && self.next[idx] == ALIVE {
                grid.grant_seed_idx(idx, self.seed_grant);
                births += 1;
            }
        }

        grid.swap_cells(&mut self.next);
        self.tick += 1;
        trace!("tick {} committed, {births} births", self.tick);
    }
}

/// Owned simulation world: grid, stepper and pattern buffer behind the
/// interface the rendering and input layers consume.
///
/// Lifecycle: construct with fixed dimensions, run an arbitrary number of
/// `tick` / `place_pattern` calls. Plain value, no teardown.
pub struct Simulation {
    grid: Grid,
    stepper: Stepper,
    pattern: PatternBuffer,
}

impl Simulation {
    /// Build a world from a validated configuration, applying its initial
    /// seed marks.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut grid = Grid::new(config.rows, config.cols)?;
        for &(row, col) in &config.initial_marks {
            grid.grant_seed(row as i64, col as i64, config.initial_seed);
        }

        let stepper = Stepper::new(&grid, config.backend.create(), config.seed_grant);
        debug!(
            "simulation created: {}x{}, backend {}",
            config.rows,
            config.cols,
            stepper.backend_name()
        );

        Ok(Self {
            grid,
            stepper,
            pattern: PatternBuffer::new(),
        })
    }

    /// Advance one generation.
    pub fn tick(&mut self) {
        self.stepper.tick(&mut self.grid);
    }

    /// Read-only view of the committed generation.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ticks completed so far.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.stepper.tick_count()
    }

    /// Load a pattern for subsequent placements.
    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern.set_pattern(pattern);
    }

    /// Set the orientation applied to subsequent placements.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.pattern.set_orientation(orientation);
    }

    /// Stamp the loaded pattern's alive cells at `origin`, wrapped
    /// toroidally. Cells outside the pattern footprint are untouched.
    pub fn place_pattern(&mut self, origin: (i64, i64)) -> Result<(), PatternError> {
        let grid = &mut self.grid;
        for (row, col, alive) in self.pattern.compose_at(origin)? {
            if alive {
                grid.set(row, col, ALIVE);
            }
        }
        debug!("pattern placed at ({}, {})", origin.0, origin.1);
        Ok(())
    }

    /// Stamp the loaded pattern only if a seeded cell lies within
    /// `distance` of `origin`. Returns whether the stamp was applied.
    pub fn place_pattern_if_seeded(
        &mut self,
        origin: (i64, i64),
        distance: i64,
    ) -> Result<bool, PatternError> {
        if !self.pattern.is_loaded() {
            return Err(PatternError::NoPatternLoaded);
        }
        if !self.grid.seeded_near(origin.0, origin.1, distance) {
            return Ok(false);
        }
        self.place_pattern(origin)?;
        Ok(true)
    }
}

/// Snapshot statistics for monitoring and CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimStats {
    pub tick: u64,
    pub live_cells: usize,
    pub seeded_cells: usize,
}

impl SimStats {
    /// Compute statistics from a simulation.
    pub fn from_sim(sim: &Simulation) -> Self {
        let grid = sim.grid();
        Self {
            tick: sim.tick_count(),
            live_cells: grid.cells().iter().filter(|&&c| c == ALIVE).count(),
            seeded_cells: grid.seeds().iter().filter(|&&s| s > 0).count(),
        }
    }
}
