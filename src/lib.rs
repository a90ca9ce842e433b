//! Pixel grid (workspace facade crate).
//!
//! Exposes `pixel_grid::{core, script, types}` while the implementation lives
//! in dedicated crates under `crates/`.

pub mod cli;

pub use pixel_grid_core as core;
pub use pixel_grid_script as script;
pub use pixel_grid_types as types;
