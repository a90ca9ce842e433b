//! Script session - applies commands to a grid
//!
//! A session owns at most one grid. `create` replaces it; every other command
//! needs a grid to exist first.

use log::debug;
use pixel_grid_core::Grid;
use pixel_grid_types::Color;

use crate::error::ScriptError;
use crate::protocol::Command;

/// Result of applying a single command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Number of cells repainted by a region fill
    Filled(usize),
    Dump(String),
}

/// A grid plus the commands that act on it
#[derive(Debug, Clone, Default)]
pub struct Session {
    grid: Option<Grid>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing grid instead of a `create` command
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid: Some(grid) }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn into_grid(self) -> Option<Grid> {
        self.grid
    }

    fn grid_mut(&mut self) -> Result<&mut Grid, ScriptError> {
        self.grid.as_mut().ok_or(ScriptError::NoGrid)
    }

    /// Apply one command
    pub fn apply(&mut self, command: &Command) -> Result<Outcome, ScriptError> {
        debug!("apply {:?}", command);

        let outcome = match *command {
            Command::Create { width, height } => {
                self.grid = Some(Grid::try_new(width, height)?);
                Outcome::Done
            }
            Command::Clear => {
                self.grid_mut()?.clear();
                Outcome::Done
            }
            Command::PaintPixel { x, y, color } => {
                self.grid_mut()?.paint_pixel(x, y, Color(color))?;
                Outcome::Done
            }
            Command::PaintVertical { x, y1, y2, color } => {
                self.grid_mut()?.paint_vertical(x, y1, y2, Color(color))?;
                Outcome::Done
            }
            Command::PaintHorizontal { x1, x2, y, color } => {
                self.grid_mut()?.paint_horizontal(x1, x2, y, Color(color))?;
                Outcome::Done
            }
            Command::FillRect {
                x1,
                y1,
                x2,
                y2,
                color,
            } => {
                self.grid_mut()?.fill_rect(x1, y1, x2, y2, Color(color))?;
                Outcome::Done
            }
            Command::FillRegion { x, y, color } => {
                let painted = self.grid_mut()?.fill_region(x, y, Color(color))?;
                Outcome::Filled(painted)
            }
            Command::Dump => Outcome::Dump(self.grid().ok_or(ScriptError::NoGrid)?.to_string()),
        };

        Ok(outcome)
    }

    /// Apply every command in order, stopping at the first error.
    ///
    /// Returns the dumps produced along the way.
    pub fn run(&mut self, commands: &[Command]) -> Result<Vec<String>, ScriptError> {
        let mut dumps = Vec::new();
        for command in commands {
            if let Outcome::Dump(text) = self.apply(command)? {
                dumps.push(text);
            }
        }
        Ok(dumps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_grid_core::GridError;

    #[test]
    fn test_commands_before_create_fail() {
        let mut session = Session::new();
        assert!(matches!(
            session.apply(&Command::Dump),
            Err(ScriptError::NoGrid)
        ));
        assert!(matches!(
            session.apply(&Command::Clear),
            Err(ScriptError::NoGrid)
        ));
        assert!(session.grid().is_none());
    }

    #[test]
    fn test_create_replaces_grid() {
        let mut session = Session::new();
        session
            .apply(&Command::Create { width: 2, height: 2 })
            .unwrap();
        session
            .apply(&Command::PaintPixel { x: 0, y: 0, color: 5 })
            .unwrap();
        session
            .apply(&Command::Create { width: 3, height: 1 })
            .unwrap();

        assert_eq!(session.grid(), Some(&Grid::new(3, 1)));
    }

    #[test]
    fn test_oversized_create_is_rejected() {
        let mut session = Session::with_grid(Grid::new(1, 1));
        let size = 1usize << (usize::BITS / 2);
        let err = session
            .apply(&Command::Create {
                width: size,
                height: size,
            })
            .unwrap_err();

        assert!(matches!(
            err,
            ScriptError::Grid(GridError::TooLarge { width, height }) if width == size && height == size
        ));
        // the previous grid is kept
        assert_eq!(session.grid(), Some(&Grid::new(1, 1)));
    }

    #[test]
    fn test_fill_region_reports_count() {
        let mut session = Session::with_grid(Grid::new(3, 2));
        assert_eq!(
            session.apply(&Command::FillRegion { x: 0, y: 0, color: 4 }).unwrap(),
            Outcome::Filled(6)
        );
    }

    #[test]
    fn test_grid_errors_pass_through() {
        let mut session = Session::with_grid(Grid::new(2, 2));
        let err = session
            .apply(&Command::PaintPixel { x: 2, y: 0, color: 1 })
            .unwrap_err();
        assert!(matches!(err, ScriptError::Grid(ref e) if e.is_out_of_bounds()));
    }

    #[test]
    fn test_run_collects_dumps() {
        let mut session = Session::new();
        let dumps = session
            .run(&[
                Command::Create { width: 2, height: 1 },
                Command::Dump,
                Command::PaintPixel { x: 1, y: 0, color: 7 },
                Command::Dump,
            ])
            .unwrap();
        assert_eq!(dumps, vec!["0, 0, \n".to_string(), "0, 7, \n".to_string()]);
    }
}
