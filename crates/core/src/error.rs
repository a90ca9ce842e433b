//! Grid errors
//!
//! Every accessor and mutator validates its coordinates before touching a cell,
//! so a returned error always means the grid was left unchanged.

use thiserror::Error;

/// Errors produced by grid construction, access and parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("row {row} has {found} cells, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("a {width}x{height} grid does not fit in memory")]
    TooLarge { width: usize, height: usize },
    #[error("line {line}: invalid color {token:?}")]
    Parse { line: usize, token: String },
    #[error("line {line}: row has {found} cells, expected {expected}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl GridError {
    /// Returns true if this error was caused by an out-of-range coordinate.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, GridError::OutOfBounds { .. })
    }
}
