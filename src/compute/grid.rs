//! Toroidal grid state: cell buffer plus the decaying seed overlay.
//!
//! Cells are stored flat in row-major order. The grid is logically
//! toroidal: every edge connects to the opposite edge, so neighbor lookups
//! never hit a boundary. Alongside the binary cell state each position
//! carries a seed counter, a small number of "ticks of residual highlight"
//! granted when a cell is born and decremented once per tick.

use crate::schema::ConfigError;

/// Cell state: 0 dead, 1 alive. Committed buffers never hold other values.
pub type CellState = u8;

pub const DEAD: CellState = 0;
pub const ALIVE: CellState = 1;

/// Wrap one step down: `i - 1` with toroidal wraparound.
#[inline]
pub(crate) fn wrap_prev(i: usize, dim: usize) -> usize {
    if i == 0 { dim - 1 } else { i - 1 }
}

/// Wrap one step up: `i + 1` with toroidal wraparound.
#[inline]
pub(crate) fn wrap_next(i: usize, dim: usize) -> usize {
    if i + 1 == dim { 0 } else { i + 1 }
}

/// Normalize an arbitrary signed coordinate onto the torus.
#[inline]
fn wrap_axis(i: i64, dim: usize) -> usize {
    i.rem_euclid(dim as i64) as usize
}

/// Count live cells in the 8 toroidally-wrapped neighbors of (row, col).
///
/// Operates on a raw snapshot slice so backends can sample a read-only
/// buffer without borrowing the whole grid. Wrapped row and column indices
/// are computed once and reused across the three cells they touch.
#[inline]
pub fn live_neighbors(cells: &[CellState], rows: usize, cols: usize, row: usize, col: usize) -> u8 {
    let row_prev = wrap_prev(row, rows) * cols;
    let row_curr = row * cols;
    let row_next = wrap_next(row, rows) * cols;
    let col_prev = wrap_prev(col, cols);
    let col_next = wrap_next(col, cols);

    cells[row_prev + col_prev]
        + cells[row_prev + col]
        + cells[row_prev + col_next]
        + cells[row_curr + col_prev]
        + cells[row_curr + col_next]
        + cells[row_next + col_prev]
        + cells[row_next + col]
        + cells[row_next + col_next]
}

/// Fixed-size toroidal grid owning the cell and seed buffers.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    seeds: Vec<u32>,
}

impl Grid {
    /// Create an all-dead grid. Dimensions are immutable afterwards.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![DEAD; rows * cols],
            seeds: vec![0; rows * cols],
        })
    }

    /// Grid height in cells.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Convert (row, col) to flat index.
    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Normalize an arbitrary signed coordinate onto the torus.
    #[inline]
    pub fn wrap(&self, row: i64, col: i64) -> (usize, usize) {
        (wrap_axis(row, self.rows), wrap_axis(col, self.cols))
    }

    /// Cell state at (row, col), wrapped toroidally.
    #[inline]
    pub fn get(&self, row: i64, col: i64) -> CellState {
        let (r, c) = self.wrap(row, col);
        self.cells[self.idx(r, c)]
    }

    /// Set cell state at (row, col), wrapped toroidally.
    #[inline]
    pub fn set(&mut self, row: i64, col: i64, value: CellState) {
        let (r, c) = self.wrap(row, col);
        let idx = self.idx(r, c);
        self.cells[idx] = value;
    }

    /// Live count among the 8 neighbors of (row, col).
    #[inline]
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        live_neighbors(&self.cells, self.rows, self.cols, row, col)
    }

    /// Seed counter at (row, col), wrapped toroidally.
    #[inline]
    pub fn seed_at(&self, row: i64, col: i64) -> u32 {
        let (r, c) = self.wrap(row, col);
        self.seeds[self.idx(r, c)]
    }

    /// Decrement every positive seed counter by one.
    pub fn decay_seeds(&mut self) {
        for seed in &mut self.seeds {
            if *seed > 0 {
                *seed -= 1;
            }
        }
    }

    /// Add `amount` highlight ticks at (row, col), wrapped toroidally.
    #[inline]
    pub fn grant_seed(&mut self, row: i64, col: i64, amount: u32) {
        let (r, c) = self.wrap(row, col);
        let idx = self.idx(r, c);
        self.seeds[idx] = self.seeds[idx].saturating_add(amount);
    }

    /// True if any cell within the Chebyshev window of `distance` around
    /// (row, col) carries a positive seed counter. Used to gate pattern
    /// placement to regions near recent activity.
    pub fn seeded_near(&self, row: i64, col: i64, distance: i64) -> bool {
        for dr in -distance..=distance {
            for dc in -distance..=distance {
                if self.seed_at(row + dr, col + dc) > 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Read-only view of the current cell buffer.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Read-only view of the seed buffer.
    #[inline]
    pub fn seeds(&self) -> &[u32] {
        &self.seeds
    }

    /// Coordinates of all live cells, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == ALIVE)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
    }

    /// Swap the cell buffer with an externally computed next generation.
    ///
    /// The stepper's commit point: the scratch buffer it filled becomes the
    /// visible generation and the old buffer becomes the next write target.
    pub(crate) fn swap_cells(&mut self, next: &mut Vec<CellState>) {
        debug_assert_eq!(next.len(), self.cells.len());
        std::mem::swap(&mut self.cells, next);
    }

    /// Grant a seed by flat index. Internal fast path for the stepper's
    /// birth scan.
    #[inline]
    pub(crate) fn grant_seed_idx(&mut self, idx: usize, amount: u32) {
        self.seeds[idx] = self.seeds[idx].saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Brute-force toroidal neighbor count via full modulo arithmetic.
    fn brute_force_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                count += grid.get(row as i64 + dr, col as i64 + dc);
            }
        }
        count
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Grid::new(0, 10),
            Err(ConfigError::InvalidDimensions { rows: 0, cols: 10 })
        ));
        assert!(Grid::new(10, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_get_set_wraparound() {
        let mut grid = Grid::new(4, 6).unwrap();
        grid.set(-1, -1, ALIVE);
        assert_eq!(grid.get(3, 5), ALIVE);
        grid.set(4, 6, ALIVE);
        assert_eq!(grid.get(0, 0), ALIVE);
        // Multi-step wrap for stamping coordinates.
        grid.set(-5, 13, ALIVE);
        assert_eq!(grid.get(3, 1), ALIVE);
    }

    #[test]
    fn test_neighbor_count_matches_brute_force_3x3() {
        let mut grid = Grid::new(3, 3).unwrap();
        // On a 3x3 torus a single live cell is its own wrapped neighbor
        // in all 8 directions.
        grid.set(1, 1, ALIVE);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(
                    grid.neighbor_count(row, col),
                    brute_force_neighbors(&grid, row, col),
                    "mismatch at ({row}, {col})"
                );
            }
        }
        assert_eq!(grid.neighbor_count(0, 0), 1);
        assert_eq!(grid.neighbor_count(1, 1), 0);
    }

    #[test]
    fn test_neighbor_count_matches_brute_force_asymmetric() {
        let mut grid = Grid::new(4, 7).unwrap();
        // Deterministic scatter covering corners and edges.
        for (row, col) in [(0, 0), (0, 6), (3, 0), (3, 6), (1, 3), (2, 2), (0, 3)] {
            grid.set(row, col, ALIVE);
        }
        for row in 0..4 {
            for col in 0..7 {
                assert_eq!(
                    grid.neighbor_count(row, col),
                    brute_force_neighbors(&grid, row, col),
                    "mismatch at ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_corner_wraparound_adjacency() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(0, 0, ALIVE);
        // Opposite corner sees it through the torus.
        assert_eq!(grid.neighbor_count(4, 4), 1);
        assert_eq!(grid.neighbor_count(0, 4), 1);
        assert_eq!(grid.neighbor_count(4, 0), 1);
        assert_eq!(grid.neighbor_count(2, 2), 0);
    }

    #[test]
    fn test_seed_decay_floor() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.grant_seed(1, 1, 2);
        let before: Vec<u32> = grid.seeds().to_vec();

        grid.decay_seeds();
        for (idx, &seed) in grid.seeds().iter().enumerate() {
            assert_eq!(seed, before[idx].saturating_sub(1));
        }

        grid.decay_seeds();
        grid.decay_seeds();
        assert_eq!(grid.seed_at(1, 1), 0);
    }

    #[test]
    fn test_grant_seed_accumulates() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.grant_seed(0, 0, 20);
        grid.grant_seed(0, 0, 20);
        assert_eq!(grid.seed_at(0, 0), 40);
        grid.grant_seed(-3, 3, 5);
        assert_eq!(grid.seed_at(0, 0), 45);
    }

    #[test]
    fn test_seeded_near() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.grant_seed(5, 5, 1);
        assert!(grid.seeded_near(5, 5, 0));
        assert!(grid.seeded_near(3, 3, 2));
        assert!(!grid.seeded_near(0, 0, 2));
        // Window wraps with the torus.
        assert!(grid.seeded_near(9, 9, 6));
    }
}
