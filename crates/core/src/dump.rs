//! Text dump of a grid
//!
//! `Display` writes one line per row, each cell followed by `", "`, and a
//! newline after every row:
//!
//! ```text
//! 0, 1, 0, \n
//! 1, 0, 1, \n
//! ```
//!
//! `FromStr` reads the same format back, which makes dumps usable as test
//! fixtures. The parser is lenient about whitespace and accepts rows with or
//! without the trailing separator; blank lines are skipped. A text made only
//! of empty lines is the dump of a zero-width grid, one row per line.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::GridError;
use crate::grid::Grid;
use crate::types::{Color, CELL_SEPARATOR, ROW_TERMINATOR};

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}{}", cell, CELL_SEPARATOR)?;
            }
            write!(f, "{}", ROW_TERMINATOR)?;
        }
        Ok(())
    }
}

/// Parse one dump line into colors. `line_no` is 1-based, for error reporting.
fn parse_row(line: &str, line_no: usize) -> Result<Vec<Color>, GridError> {
    let separator = CELL_SEPARATOR.trim();
    let mut tokens: Vec<&str> = line.split(separator).map(str::trim).collect();

    // "0, 1, " splits into ["0", "1", ""]
    if tokens.last() == Some(&"") {
        tokens.pop();
    }

    tokens
        .into_iter()
        .map(|token| {
            Color::parse(token).ok_or_else(|| GridError::Parse {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // zero-width rows dump as bare newlines
        if !s.is_empty() && s.lines().all(str::is_empty) {
            let height = s.lines().count();
            trace!("parsed 0x{} grid from dump", height);
            return Ok(Grid::from_parts(0, height, Vec::new()));
        }

        let mut width: Option<usize> = None;
        let mut height = 0usize;
        let mut cells = Vec::new();

        for (i, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let row = parse_row(line, i + 1)?;
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(GridError::RowLength {
                    line: i + 1,
                    expected,
                    found: row.len(),
                });
            }

            cells.extend(row);
            height += 1;
        }

        let width = width.unwrap_or(0);
        trace!("parsed {}x{} grid from dump", width, height);
        Ok(Grid::from_parts(width, height, cells))
    }
}
