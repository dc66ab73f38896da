//! warmdents - Concurrent dentry/inode cache warmer
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use warmdents::config::{CliArgs, WarmConfig};
use warmdents::progress::{print_header, print_summary};
use warmdents::walker::{LockStrategy, WarmCoordinator};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    setup_logging(args.verbose)?;

    let config = WarmConfig::from_args(args).context("Invalid configuration")?;

    if config.show_summary {
        print_header(
            &config.roots,
            config.worker_count,
            strategy_name(config.lock_strategy),
        );
    }

    let show_summary = config.show_summary;
    let coordinator = WarmCoordinator::new(config);
    let result = coordinator.run().context("Warming run failed")?;

    if show_summary {
        print_summary(result.total_entries, result.seeded, result.duration);
    }

    // The bare total always goes to stderr so scripts can capture it
    // without parsing the styled summary.
    eprintln!("{}", result.total_entries);

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    // Default to warnings only: stderr carries the bare total, and
    // scripts capture it without filtering log lines out.
    let filter = if verbose {
        EnvFilter::new("warmdents=debug,warn")
    } else {
        EnvFilter::new("warmdents=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}

fn strategy_name(strategy: LockStrategy) -> &'static str {
    match strategy {
        LockStrategy::Spin => "spin",
        LockStrategy::Mutex => "mutex",
    }
}
