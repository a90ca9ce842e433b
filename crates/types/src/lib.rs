//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the grid itself, the script interpreter and the command-line runner alike.
//!
//! # Colors
//!
//! A [`Color`] is an opaque integer tag. There is no fixed palette: `Color(0)`
//! is the background ("white") that new and cleared grids are filled with, and
//! every other value simply means "some other color".
//!
//! # Dump Format
//!
//! Grids are dumped as text, one line per row, each cell written as its decimal
//! value followed by [`CELL_SEPARATOR`]:
//!
//! ```text
//! 0, 0, 0, \n
//! 0, 1, 0, \n
//! ```
//!
//! # Examples
//!
//! ```
//! use pixel_grid_types::{Color, CELL_SEPARATOR};
//!
//! let red = Color::from(3);
//! assert_eq!(red.value(), 3);
//! assert!(!red.is_background());
//! assert!(Color::BACKGROUND.is_background());
//!
//! assert_eq!(Color::parse(" 7 "), Some(Color(7)));
//! assert_eq!(Color::parse("x"), None);
//!
//! assert_eq!(format!("{}{}", red, CELL_SEPARATOR), "3, ");
//! ```

use std::fmt;

/// Written after every cell in a dump, including the last one of a row
pub const CELL_SEPARATOR: &str = ", ";

/// Written after every row in a dump, including the last one
pub const ROW_TERMINATOR: char = '\n';

/// Color of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color(pub u32);

impl Color {
    /// Background color of new and cleared grids
    pub const BACKGROUND: Color = Color(0);

    /// Raw integer tag
    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn is_background(self) -> bool {
        self.0 == Self::BACKGROUND.0
    }

    /// Parse a decimal color value, ignoring surrounding whitespace
    ///
    /// Returns `None` for anything that is not a non-negative integer.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<u32>().ok().map(Color)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
