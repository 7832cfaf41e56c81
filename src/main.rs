use anyhow::Context;
use buoy_rules::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        commands::run(args)
            .await
            .context("Rule evaluation failed")
    });

    match result {
        Ok(summary) if summary.failed > 0 => {
            // Failed rules have already been reported alongside the verdicts
            process::exit(1);
        }
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
