/*
cargo run --bin create_presentation_assets

cargo run --bin create_presentation_assets -- \
    --in-dir  data/dpo_classifier \
    --out-dir presentation \
    --log-dir logs
*/

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use dpo_assets::{run, RunConfig};
use log::info;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::{create_dir_all, File};
use std::path::PathBuf;

/// Render DPO classifier statistics and samples into presentation assets.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory containing dpo_classifier_statistics.json and dpo_classifier_training_sample.json
    #[arg(long = "in-dir", value_name = "PATH", default_value = ".")]
    in_dir: PathBuf,

    /// Directory where the four assets are written
    #[arg(long = "out-dir", value_name = "PATH", default_value = ".")]
    out_dir: PathBuf,

    /// Also write an info-level run log into this directory
    #[arg(long, value_name = "PATH")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logging setup, nothing lands on disk unless --log-dir is given
    match &cli.log_dir {
        Some(dir) => {
            create_dir_all(dir)?;
            let ts = Local::now().format("%Y%m%d_%H%M%S");
            let log_path = dir.join(format!("create_presentation_assets_{ts}.log"));
            WriteLogger::init(
                LevelFilter::Info,
                LogConfig::default(),
                File::create(&log_path)?,
            )?;
        }
        None => TermLogger::init(
            LevelFilter::Warn,
            LogConfig::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }
    info!("Started - in_dir: {:?}, out_dir: {:?}", cli.in_dir, cli.out_dir);

    run(&RunConfig {
        in_dir: cli.in_dir,
        out_dir: cli.out_dir,
    })?;
    Ok(())
}
