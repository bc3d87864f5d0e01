use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use mov2mp4::{Args, Converter};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    println!("Converting MOV to MP4 for web compatibility...");

    let converter = Converter::new(args.request())
        .tool(args.tool.as_str())
        .show_progress(!args.no_progress && io::stderr().is_terminal());

    let mut stdout = io::stdout();
    if converter.convert(&mut stdout).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
