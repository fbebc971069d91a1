use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the `checkpoint` binary.
#[derive(Debug, Parser)]
#[command(name = "checkpoint", version, about = "Periodic HTTP endpoint health checker")]
pub struct Args {
    /// Path to the YAML config file. Falls back to $CONFIG_FILE, then config.yml.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds between batch ticks. Must be at least 1.
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Number of batches to run before the summary is reported.
    #[arg(long, default_value_t = 20)]
    pub iterations: u32,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(|| {
            std::env::var("CONFIG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config.yml"))
        })
    }
}
