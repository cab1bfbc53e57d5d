#![deny(clippy::all, clippy::pedantic)]
//! # Hover Runtime
//!
//! Headless episode runner for the hover task.
//!
//! Builds a [`rl::HoverTask`] from an optional JSON config, drives it with a
//! seeded uniform-random rotor policy and logs a summary for every episode.
//! Pass `--json` to also print one machine-readable summary per line on
//! stdout; logs always go to stderr.

mod app;

use anyhow::{Context, Result};
use clap::Parser;
use rl::TaskConfig;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "runtime_main", about = "Fly hover-task episodes with a random rotor policy")]
struct Args {
    /// JSON task config. Defaults apply to every field it omits.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of episodes to run
    #[arg(long, default_value_t = 3)]
    episodes: usize,

    /// Seed for the random policy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print episode summaries as JSON lines on stdout
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => TaskConfig::from_path(path)
            .with_context(|| format!("loading task config from {}", path.display()))?,
        None => TaskConfig::default(),
    };

    let options = app::RunOptions {
        config,
        episodes: args.episodes,
        seed: args.seed,
    };
    let summaries = app::run(&options)?;

    if args.json {
        for summary in &summaries {
            println!("{}", serde_json::to_string(summary)?);
        }
    }
    Ok(())
}
