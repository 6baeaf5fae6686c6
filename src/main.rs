use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{Game, GameConfig};
use grid_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::Level;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic snake on a square grid, in the terminal")]
struct Cli {
    /// Grid edge length (overrides the config file)
    #[arg(long)]
    grid_size: Option<usize>,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "150")]
    tick_ms: u64,

    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity: error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn init_logging(path: &Path, level: Level) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.log_level)?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }

    let game = match cli.seed {
        Some(seed) => Game::with_seed(config, seed),
        None => Game::new(config),
    }
    .context("Invalid game configuration")?;

    let mut human_mode = HumanMode::new(game, Duration::from_millis(cli.tick_ms.max(1)));
    human_mode.run().await
}
