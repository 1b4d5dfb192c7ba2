use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gridsnake::{terminal, GameConfig, GameEngine, HighScoreStore, MemoryHighScore, PollTimer, SpeedLevel};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Terminal snake on a square grid")]
struct Cli {
    /// JSON file with a game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width and height, in cells
    #[arg(long)]
    board_size: Option<i32>,

    /// Speed level, 1 (slow) to 5 (fast)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    level: Option<u8>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(size) = cli.board_size {
        if size != config.board_size {
            // the default snake may not fit, so let the food be placed at random
            config.board_size = size;
            config.initial_food = None;
        }
    }
    if let Some(level) = cli.level.and_then(SpeedLevel::new) {
        config.level = level;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut store = MemoryHighScore::default();
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine = GameEngine::with_rng(config, store.load(), PollTimer::new(), rng)
        .context("Invalid game configuration")?;
    info!("[Main] starting on a {}x{} board", engine.grid().size(), engine.grid().size());

    terminal::run(&mut engine, &mut store)
}
