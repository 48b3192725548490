use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use algoscope::{util, App, Config};
use anyhow::Result;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "algoscope", about = "Terminal visualizer for sorting algorithms and classic data structures", version)]
struct Cli {
    /// Base animation pause in milliseconds
    #[arg(long)]
    speed: Option<u64>,

    /// How many random values seed the sort array
    #[arg(long)]
    seed_size: Option<usize>,

    /// Data directory (default: ~/.algoscope)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::paths::init_data_dir(cli.data_dir);

    // Initialize logging to file (~/.algoscope/logs/algoscope.log)
    fs::create_dir_all(util::paths::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::paths::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if let Some(speed) = cli.speed {
        config.speed_ms = speed;
    }
    if let Some(seed_size) = cli.seed_size {
        config.seed_size = seed_size;
    }

    let mut app = App::new(config);
    app.run().await
}
