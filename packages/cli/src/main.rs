//! Main entry point for the eckit CLI application

use clap::Parser;
use eckit_cli::{Cli, pipeline};
use eckit_common::LoggingTransformer;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize structured logging
    LoggingTransformer::init();

    let cli = Cli::parse();
    let result = cli
        .resolve_config()
        .and_then(|config| pipeline::run(&config, &mut std::io::stdout().lock()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("eckit: {e}");
            ExitCode::FAILURE
        }
    }
}
