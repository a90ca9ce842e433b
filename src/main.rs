//! Pixel grid script runner (default binary).
//!
//! Applies a line-delimited JSON drawing script to a grid and prints the dumps
//! it produces, or the final grid if the script never dumps.

use std::io::{self, Write};

use anyhow::Result;

use pixel_grid::cli::{self, RunConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = RunConfig::from_args(&args)?;
    let output = cli::run(&config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
