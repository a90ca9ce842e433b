//! Grid module - owns the pixel buffer
//!
//! The grid is a `width` x `height` matrix of colors stored in a flat,
//! row-major buffer for cache locality.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom). Dimensions are fixed at construction.

use crate::error::GridError;
use crate::types::Color;

/// A dense 2D grid of colored cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Color>,
}

impl Grid {
    /// Create a new `width` x `height` grid with every cell set to the background color
    ///
    /// # Panics
    ///
    /// Panics if `width * height` cells cannot be allocated. Use [`Grid::try_new`]
    /// for sizes that come from untrusted input.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a new background-colored grid, failing with [`GridError::TooLarge`]
    /// if the cell count overflows or the buffer cannot be allocated
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        let too_large = GridError::TooLarge { width, height };
        let len = width.checked_mul(height).ok_or(too_large.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, Color::BACKGROUND);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid from rows of raw color values
    ///
    /// The height is the number of rows and the width the length of the first
    /// row. Every other row must have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_grid_core::{Color, Grid};
    ///
    /// let grid = Grid::from_rows(&[[0, 1, 0], [1, 0, 1]]).unwrap();
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.get_pixel(1, 0), Ok(Color(1)));
    /// ```
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        if let Some((y, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != width)
        {
            return Err(GridError::Shape {
                row: y,
                expected: width,
                found: row.as_ref().len(),
            });
        }

        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied().map(Color))
            .collect();
        Ok(Self::from_parts(width, rows.len(), cells))
    }

    /// Assemble a grid from an already validated flat buffer
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<Color>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if (x, y) lies inside the grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Get the color at (x, y)
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Color, GridError> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Reset every cell to the background color, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Color::BACKGROUND);
    }

    /// Set the color at (x, y)
    pub fn paint_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = color;
        Ok(())
    }

    /// Paint column `x` between rows `y1` and `y2` inclusive
    ///
    /// Both endpoints must be inside the grid. `y1 > y2` paints nothing.
    pub fn paint_vertical(
        &mut self,
        x: usize,
        y1: usize,
        y2: usize,
        color: Color,
    ) -> Result<(), GridError> {
        self.index(x, y1)?;
        self.index(x, y2)?;

        for y in y1..=y2 {
            self.cells[y * self.width + x] = color;
        }
        Ok(())
    }

    /// Paint row `y` between columns `x1` and `x2` inclusive
    ///
    /// Both endpoints must be inside the grid. `x1 > x2` paints nothing.
    pub fn paint_horizontal(
        &mut self,
        x1: usize,
        x2: usize,
        y: usize,
        color: Color,
    ) -> Result<(), GridError> {
        let start = self.index(x1, y)?;
        let end = self.index(x2, y)?;

        if start <= end {
            self.cells[start..=end].fill(color);
        }
        Ok(())
    }

    /// Fill the rectangle with upper left corner (x1, y1) and lower right corner (x2, y2)
    ///
    /// Both corners are validated before anything is painted, so a rejected
    /// rectangle leaves the grid untouched.
    pub fn fill_rect(
        &mut self,
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
        color: Color,
    ) -> Result<(), GridError> {
        self.index(x1, y1)?;
        self.index(x2, y2)?;

        for y in y1..=y2 {
            self.paint_horizontal(x1, x2, y, color)?;
        }
        Ok(())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Color] {
        &mut self.cells
    }

    /// Get row `y` as a slice, `None` if out of range
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
