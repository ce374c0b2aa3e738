//! Pointer-to-grid coordinate mapping under pan and zoom.
//!
//! Pan and zoom are owned by the input layer and supplied per call; the
//! viewport itself only carries dimension constants. The view transform is
//! `translate(pan) scale(zoom)` applied to the view rectangle, so a raw
//! pointer position maps to world space as
//! `world = (pointer - view_origin - pan) / zoom` and then to a cell index
//! by proportional scaling into the grid dimensions.

/// Stateless mapper between pointer space and grid indices.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Top-left corner of the view rectangle in pointer space.
    pub origin: (f64, f64),
    /// View rectangle size in pixels.
    pub width: f64,
    pub height: f64,
    rows: usize,
    cols: usize,
}

impl Viewport {
    pub fn new(origin: (f64, f64), width: f64, height: f64, rows: usize, cols: usize) -> Self {
        Self {
            origin,
            width,
            height,
            rows,
            cols,
        }
    }

    /// Grid (row, col) under a pointer position, given the current pan and
    /// zoom. May fall outside the grid bounds; callers wrap or reject.
    pub fn to_grid(&self, pointer: (f64, f64), pan: (f64, f64), zoom: f64) -> (i64, i64) {
        let world_x = (pointer.0 - self.origin.0 - pan.0) / zoom;
        let world_y = (pointer.1 - self.origin.1 - pan.1) / zoom;
        let col = (world_x / self.width * self.cols as f64).floor() as i64;
        let row = (world_y / self.height * self.rows as f64).floor() as i64;
        (row, col)
    }

    /// Pointer position of a cell's center: the algebraic inverse of
    /// [`Viewport::to_grid`].
    pub fn to_pointer(&self, cell: (i64, i64), pan: (f64, f64), zoom: f64) -> (f64, f64) {
        let world_x = (cell.1 as f64 + 0.5) / self.cols as f64 * self.width;
        let world_y = (cell.0 as f64 + 0.5) / self.rows as f64 * self.height;
        (
            world_x * zoom + pan.0 + self.origin.0,
            world_y * zoom + pan.1 + self.origin.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_view() {
        // 100x200 pixel view over a 10x20 grid: 10px cells.
        let view = Viewport::new((0.0, 0.0), 200.0, 100.0, 10, 20);
        assert_eq!(view.to_grid((0.0, 0.0), (0.0, 0.0), 1.0), (0, 0));
        assert_eq!(view.to_grid((15.0, 5.0), (0.0, 0.0), 1.0), (0, 1));
        assert_eq!(view.to_grid((199.0, 99.0), (0.0, 0.0), 1.0), (9, 19));
    }

    #[test]
    fn test_pan_shifts_mapping() {
        let view = Viewport::new((0.0, 0.0), 200.0, 100.0, 10, 20);
        // Panned 20px right: the pointer at x=20 sits over world x=0.
        assert_eq!(view.to_grid((20.0, 0.0), (20.0, 0.0), 1.0), (0, 0));
        // Negative world coordinates fall off the grid.
        assert_eq!(view.to_grid((0.0, 0.0), (20.0, 0.0), 1.0), (0, -2));
    }

    #[test]
    fn test_zoom_scales_mapping() {
        let view = Viewport::new((0.0, 0.0), 200.0, 100.0, 10, 20);
        // At 2x zoom each cell covers 20px of pointer space.
        assert_eq!(view.to_grid((30.0, 30.0), (0.0, 0.0), 2.0), (1, 1));
        // At 0.5x the whole grid fits in half the view.
        assert_eq!(view.to_grid((30.0, 30.0), (0.0, 0.0), 0.5), (6, 6));
    }

    #[test]
    fn test_view_origin_offset() {
        let view = Viewport::new((50.0, 10.0), 200.0, 100.0, 10, 20);
        assert_eq!(view.to_grid((50.0, 10.0), (0.0, 0.0), 1.0), (0, 0));
        assert_eq!(view.to_grid((65.0, 15.0), (0.0, 0.0), 1.0), (0, 1));
    }

    #[test]
    fn test_round_trip_cell_centers() {
        let view = Viewport::new((12.0, 34.0), 640.0, 480.0, 48, 64);
        let pan = (-17.5, 42.0);
        let zoom = 1.75;

        for &cell in &[(0, 0), (47, 63), (10, 10), (23, 50)] {
            let pointer = view.to_pointer(cell, pan, zoom);
            assert_eq!(view.to_grid(pointer, pan, zoom), cell);
        }
    }
}
