//! Core grid module - pure, deterministic, and testable
//!
//! This crate contains the pixel grid and every operation on it.
//! It has **no dependencies** on I/O, terminals or networking:
//!
//! - **Checked**: every coordinate is validated, and a rejected call never
//!   leaves a half-painted grid behind
//! - **Dense**: one flat row-major buffer, no per-row allocations
//! - **Stack-safe**: flood fill walks an explicit stack, not the call stack
//!
//! # Module Structure
//!
//! - [`grid`]: construction, inspection, pixel/line/rectangle painting, clearing
//! - [`fill`]: 4-connected region flood fill
//! - [`dump`]: the textual dump (`Display`) and its parser (`FromStr`)
//! - [`error`]: [`GridError`]
//!
//! # Example
//!
//! ```
//! use pixel_grid_core::{Color, Grid};
//!
//! let mut grid = Grid::new(5, 5);
//! grid.paint_pixel(1, 1, Color(1)).unwrap();
//!
//! assert_eq!(
//!     grid.to_string(),
//!     "0, 0, 0, 0, 0, \n0, 1, 0, 0, 0, \n0, 0, 0, 0, 0, \n0, 0, 0, 0, 0, \n0, 0, 0, 0, 0, \n"
//! );
//!
//! // Out-of-range coordinates are rejected, not ignored
//! assert!(grid.paint_pixel(5, 0, Color(2)).is_err());
//! ```

pub mod dump;
pub mod error;
pub mod fill;
pub mod grid;

pub use pixel_grid_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use grid::Grid;
pub use types::Color;
