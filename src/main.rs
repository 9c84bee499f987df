use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::File;

use rev_snake::game::{GameConfig, Speed};
use rev_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "rev_snake")]
#[command(version, about = "Terminal snake game where special food reverses the snake")]
struct Cli {
    /// Grid height
    #[arg(long, default_value = "13")]
    height: usize,

    /// Grid width
    #[arg(long, default_value = "25")]
    width: usize,

    /// Tick speed preset
    #[arg(long, value_enum, default_value = "medium")]
    speed: Speed,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path (stdout belongs to the TUI)
    #[arg(long, default_value = "rev_snake.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&cli.log_file).context("Failed to create log file")?,
    )
    .context("Failed to initialize logger")?;

    info!("Starting rev_snake on a {}x{} grid", cli.height, cli.width);

    let mut config = GameConfig::new(cli.height, cli.width);
    config.speed = cli.speed;

    let mut mode = match cli.seed {
        Some(seed) => HumanMode::with_seed(config, seed),
        None => HumanMode::new(config),
    };
    mode.run().await?;

    Ok(())
}
