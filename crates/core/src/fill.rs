//! Region fill
//!
//! The region containing a seed pixel is the maximal set of cells sharing the
//! seed's color and connected through horizontal or vertical neighbours
//! (never diagonals). Filling repaints the whole region.
//!
//! The traversal uses an explicit stack instead of recursion, so a grid that
//! is one huge region cannot exhaust the call stack. No visited set is needed:
//! a repainted cell no longer matches the start color, which ends the walk.

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::error::GridError;
use crate::grid::Grid;
use crate::types::Color;

impl Grid {
    /// In-bounds 4-connected neighbours of (x, y): right, left, up, down
    fn neighbours(&self, x: usize, y: usize) -> ArrayVec<(usize, usize), 4> {
        let mut out = ArrayVec::new();
        if x + 1 < self.width() {
            out.push((x + 1, y));
        }
        if x > 0 {
            out.push((x - 1, y));
        }
        if y > 0 {
            out.push((x, y - 1));
        }
        if y + 1 < self.height() {
            out.push((x, y + 1));
        }
        out
    }

    /// Flood fill the region containing (x, y) with `color`
    ///
    /// Returns the number of repainted cells. Filling a region with its own
    /// color changes nothing and returns 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_grid_core::{Color, Grid};
    ///
    /// let mut grid = Grid::from_rows(&[
    ///     [0, 1, 0],
    ///     [0, 1, 0],
    ///     [0, 0, 1],
    /// ]).unwrap();
    ///
    /// // The 1s wall off the right column.
    /// assert_eq!(grid.fill_region(0, 0, Color(7)), Ok(4));
    /// assert_eq!(grid.get_pixel(1, 2), Ok(Color(7)));
    /// assert_eq!(grid.get_pixel(2, 0), Ok(Color(0)));
    /// ```
    pub fn fill_region(&mut self, x: usize, y: usize, color: Color) -> Result<usize, GridError> {
        let start = self.get_pixel(x, y)?;
        if start == color {
            trace!("fill_region({}, {}): region already has color {}", x, y, color);
            return Ok(0);
        }

        let width = self.width();
        let mut painted = 0usize;
        let mut stack = vec![(x, y)];

        while let Some((cx, cy)) = stack.pop() {
            let idx = cy * width + cx;
            // reached a wall, or a cell pushed twice and already repainted
            if self.cells()[idx] != start {
                continue;
            }

            self.cells_mut()[idx] = color;
            painted += 1;

            for next in self.neighbours(cx, cy) {
                stack.push(next);
            }
        }

        debug!(
            "fill_region({}, {}): repainted {} cells from {} to {}",
            x, y, painted, start, color
        );
        Ok(painted)
    }
}
