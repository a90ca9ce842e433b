//! Command-line configuration for the `pixel-grid` runner.
//!
//! ```text
//! pixel-grid [--width N --height N] [--from DUMPFILE] SCRIPT
//! ```
//!
//! `--width`/`--height` fall back to `PIXEL_GRID_WIDTH`/`PIXEL_GRID_HEIGHT`
//! when both variables are set.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::info;

use pixel_grid_core::Grid;
use pixel_grid_script::{parse_script, Session};

/// Where the runner's starting grid comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialGrid {
    /// The script creates its own grid
    None,
    Blank { width: usize, height: usize },
    /// Parse a textual dump from this file
    Dump(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub script: PathBuf,
    pub initial: InitialGrid,
}

fn parse_dimension(flag: &str, value: Option<&String>) -> Result<usize> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<usize>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

fn env_dimension(name: &str) -> Option<usize> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

impl RunConfig {
    /// Parse arguments (without the program name), using the environment for
    /// missing dimensions.
    pub fn from_args(args: &[String]) -> Result<Self> {
        Self::parse(
            args,
            env_dimension("PIXEL_GRID_WIDTH"),
            env_dimension("PIXEL_GRID_HEIGHT"),
        )
    }

    fn parse(
        args: &[String],
        default_width: Option<usize>,
        default_height: Option<usize>,
    ) -> Result<Self> {
        // a lone env dimension is ignored rather than half-applied
        let (default_width, default_height) = match (default_width, default_height) {
            (Some(w), Some(h)) => (Some(w), Some(h)),
            _ => (None, None),
        };

        let mut width = None;
        let mut height = None;
        let mut from = None;
        let mut script = None;

        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--width" => {
                    i += 1;
                    width = Some(parse_dimension("--width", args.get(i))?);
                }
                "--height" => {
                    i += 1;
                    height = Some(parse_dimension("--height", args.get(i))?);
                }
                "--from" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --from"))?;
                    from = Some(PathBuf::from(v));
                }
                other if other.starts_with("--") => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
                other => {
                    if script.is_some() {
                        return Err(anyhow!("unexpected extra argument: {}", other));
                    }
                    script = Some(PathBuf::from(other));
                }
            }
            i += 1;
        }

        let script = script.ok_or_else(|| anyhow!("missing SCRIPT argument"))?;

        let initial = match (from, width.or(default_width), height.or(default_height)) {
            (Some(path), _, _) if width.is_some() || height.is_some() => {
                return Err(anyhow!(
                    "--from {} cannot be combined with --width/--height",
                    path.display()
                ));
            }
            (Some(path), _, _) => InitialGrid::Dump(path),
            (None, Some(width), Some(height)) => InitialGrid::Blank { width, height },
            (None, None, None) => InitialGrid::None,
            (None, _, _) => {
                return Err(anyhow!("--width and --height must be given together"));
            }
        };

        Ok(Self { script, initial })
    }
}

/// Load the starting grid and script named by `config` and run it.
///
/// Returns the text to print: every dump the script produced, or the final
/// grid once if the script never dumps.
pub fn run(config: &RunConfig) -> Result<String> {
    let session = match &config.initial {
        InitialGrid::None => Session::new(),
        InitialGrid::Blank { width, height } => Session::with_grid(
            Grid::try_new(*width, *height).context("creating the starting grid")?,
        ),
        InitialGrid::Dump(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading grid dump {}", path.display()))?;
            let grid: Grid = text
                .parse()
                .with_context(|| format!("parsing grid dump {}", path.display()))?;
            Session::with_grid(grid)
        }
    };

    let text = fs::read_to_string(&config.script)
        .with_context(|| format!("reading script {}", config.script.display()))?;
    run_script(session, &text)
        .with_context(|| format!("running script {}", config.script.display()))
}

/// Run script text against `session`, producing the runner's output
pub fn run_script(mut session: Session, script: &str) -> Result<String> {
    let commands = parse_script(script)?;
    info!("running {} commands", commands.len());

    let dumps = session.run(&commands)?;
    if !dumps.is_empty() {
        return Ok(dumps.concat());
    }

    let grid = session
        .grid()
        .ok_or_else(|| anyhow!("script finished without creating a grid"))?;
    Ok(grid.to_string())
}
