use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use checkpoint::args::Args;
use checkpoint::http_probe::prelude::*;
use checkpoint::{config, logger, report, schedule};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_logging(args.verbose);

    let config_path = args.config_path();
    let probe_config = match config::load(&config_path) {
        Ok(probe_config) => probe_config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let client = match build_client(probe_config.timeout) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        endpoints = probe_config.endpoints.len(),
        timeout_ms = probe_config.timeout.as_millis() as u64,
        "Running health checks"
    );
    println!("Running health checks...");

    let tick = Duration::from_millis(args.interval_ms);
    let accumulator = schedule::run(
        &client,
        &probe_config,
        tick,
        args.iterations,
        |_| println!("Tick at {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")),
        |batch| {
            println!("\nResults:");
            print!("{}", report::render_table(batch));
        },
    )
    .await;

    println!("\n{}", report::render_summary(accumulator.mean_latency()));
    ExitCode::SUCCESS
}
