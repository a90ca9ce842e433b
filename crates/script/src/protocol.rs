//! Protocol module - JSON command types for drawing scripts
//!
//! A script is line-delimited JSON, one command per line, tagged by `op`:
//!
//! ```text
//! {"op":"create","width":5,"height":6}
//! {"op":"fillRect","x1":0,"y1":0,"x2":1,"y2":1,"color":3}
//! {"op":"fillRegion","x":4,"y":5,"color":2}
//! {"op":"dump"}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use serde::{Deserialize, Serialize};

use crate::error::ScriptError;

/// One drawing command. Field names match the grid operation arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    /// Replace the current grid with a new background-colored one
    Create { width: usize, height: usize },
    Clear,
    PaintPixel { x: usize, y: usize, color: u32 },
    PaintVertical {
        x: usize,
        y1: usize,
        y2: usize,
        color: u32,
    },
    PaintHorizontal {
        x1: usize,
        x2: usize,
        y: usize,
        color: u32,
    },
    FillRect {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
        color: u32,
    },
    FillRegion { x: usize, y: usize, color: u32 },
    /// Emit the textual dump of the current grid
    Dump,
}

impl Command {
    /// Protocol name of the command, as it appears in the `op` field
    pub fn op(&self) -> &'static str {
        match self {
            Command::Create { .. } => "create",
            Command::Clear => "clear",
            Command::PaintPixel { .. } => "paintPixel",
            Command::PaintVertical { .. } => "paintVertical",
            Command::PaintHorizontal { .. } => "paintHorizontal",
            Command::FillRect { .. } => "fillRect",
            Command::FillRegion { .. } => "fillRegion",
            Command::Dump => "dump",
        }
    }
}

/// Parse a whole script. Errors carry the 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command = serde_json::from_str::<Command>(line)
            .map_err(|source| ScriptError::Json { line: i + 1, source })?;
        commands.push(command);
    }
    Ok(commands)
}

/// Serialize commands back into script text, one per line
pub fn to_script(commands: &[Command]) -> Result<String, ScriptError> {
    let mut out = String::new();
    for (i, command) in commands.iter().enumerate() {
        let line = serde_json::to_string(command)
            .map_err(|source| ScriptError::Json { line: i + 1, source })?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}
