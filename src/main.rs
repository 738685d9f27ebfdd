//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `contact_harvest` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use contact_harvest::initialization::init_logger_with;
use contact_harvest::{process_file, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; RUST_LOG and friends may come from there
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match process_file(&config).await {
        Ok(report) => {
            println!("{}", report.summary_message());
            if let Some(path) = &report.output_path {
                println!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("contact_harvest error: {:#}", e);
            process::exit(1);
        }
    }
}
