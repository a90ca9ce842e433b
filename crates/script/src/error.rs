//! Script errors

use pixel_grid_core::GridError;
use thiserror::Error;

/// Errors produced while parsing or running a drawing script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("line {line}: invalid command: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
    #[error("no grid: the script must start with a create command")]
    NoGrid,
    #[error(transparent)]
    Grid(#[from] GridError),
}
