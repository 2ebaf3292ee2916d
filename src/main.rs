use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use snake_arcade::game::{Difficulty, GameConfig, GameEngine};
use snake_arcade::modes::ArcadeMode;
use snake_arcade::session::{EventLogger, LogNotifier, Session};

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Snake arcade game for the terminal")]
struct Cli {
    /// Speed of the game
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: Difficulty,

    /// JSON file with board and scoring settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width, overrides the config file
    #[arg(long)]
    width: Option<i32>,

    /// Board height, overrides the config file
    #[arg(long)]
    height: Option<i32>,

    /// Cell size, overrides the config file
    #[arg(long)]
    cell_size: Option<i32>,

    /// Points per food, overrides the config file
    #[arg(long)]
    reward: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write logs
    #[arg(long, default_value = "snake_arcade.log")]
    log_file: PathBuf,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(reward) = self.reward {
            config.food_reward = reward;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    snake_arcade::logging::init(&cli.log_file)?;

    let config = cli.game_config()?;
    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    }
    .context("Invalid board configuration")?;

    let mut session = Session::new(engine, cli.difficulty, Box::new(LogNotifier));
    session.add_listener(Box::new(EventLogger));

    let mut arcade = ArcadeMode::new(session);
    arcade.run().await?;

    Ok(())
}
