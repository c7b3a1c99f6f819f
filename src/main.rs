use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use carousel::Config;
use carousel::simulate;

#[derive(Debug, Parser)]
#[command(name = "carousel", version, about = "Auto-advancing hero image carousel")]
struct Cli {
    /// Slide configuration (TOML); the landing page slides when omitted
    config: Option<PathBuf>,

    /// Show every image in a directory instead of a configuration
    #[arg(long, conflicts_with = "config")]
    dir: Option<PathBuf>,

    /// Autoplay interval in milliseconds, overrides the configuration
    #[arg(long)]
    interval: Option<u64>,

    /// Run against a virtual clock and print the slide timeline
    #[arg(long)]
    headless: bool,

    /// Length of a headless run in milliseconds
    #[arg(long, default_value_t = 12_000)]
    duration: u64,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match (&cli.config, &cli.dir) {
        (Some(path), _) => Config::load(path)?,
        (None, Some(dir)) => Config::from_image_dir(dir)?,
        (None, None) => Config::default(),
    };
    if let Some(interval) = cli.interval {
        config = config.with_interval(interval);
    }

    init_logging(&config.log_level);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if cli.headless || !cfg!(feature = "window") {
        info!(duration_ms = cli.duration, "headless run");
        for frame in simulate::run(&config, cli.duration) {
            println!("{frame}");
        }
        return Ok(());
    }

    #[cfg(feature = "window")]
    carousel::window::run(&config)?;

    Ok(())
}
