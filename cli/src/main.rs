use std::io::Write;

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod session;
mod transport;

fn main() {
    if let Err(error) = run() {
        eprintln!("stratos error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = config::StratosConfig::load(&cli.config_overrides())
        .context("failed to load configuration")?;
    tracing::debug!(url = %config.url, insecure = config.insecure, "configuration loaded");

    let session = session::Session::connect(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch::dispatch(&cli.command, &session, &flags, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Logs go to stderr so table and JSON output stay clean on stdout.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STRATOS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
