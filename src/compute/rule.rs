//! Transition rule for the automaton (B3/S23).
//!
//! Standard Game of Life rules:
//! 1. A live cell with fewer than two live neighbors dies (underpopulation)
//! 2. A live cell with two or three live neighbors lives on (survival)
//! 3. A live cell with more than three live neighbors dies (overpopulation)
//! 4. A dead cell with exactly three live neighbors becomes alive (reproduction)

use super::{ALIVE, CellState, DEAD};

/// Compute the next state for one cell.
///
/// Returns the next cell state and whether the cell was born this tick
/// (dead to alive by reproduction), which triggers a seed-overlay grant.
///
/// Pure: identical output for identical input, independent of call order,
/// so the sequential and parallel backends agree bit-for-bit.
#[inline]
pub fn next_state(current: CellState, live_neighbors: u8) -> (CellState, bool) {
    if current == ALIVE {
        match live_neighbors {
            2 | 3 => (ALIVE, false),
            _ => (DEAD, false),
        }
    } else if live_neighbors == 3 {
        (ALIVE, true)
    } else {
        (DEAD, false)
    }
}
