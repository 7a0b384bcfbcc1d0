//! Sherpa CLI binary.

use std::process;

use clap::Parser;
use sherpa::cli::{args::SherpaArgs, commands::execute_command};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = SherpaArgs::parse();

    let default_level = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sherpa={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
