//! taskpad - menu-driven todo manager
//!
//! Entry point: parse arguments, load config, set up file logging, then
//! hand the terminal to the interactive shell.

use std::fs;
use std::path::Path;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use taskpad::cli::Cli;
use taskpad::config::Config;
use taskpad::shell::{RustylineReader, Shell};

fn setup_logging(verbose: bool, log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    // Logs go to a file, never stdout - the interactive surface stays clean
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("taskpad.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    setup_logging(cli.verbose, &config.log_dir).context("Failed to setup logging")?;

    if !config.color {
        colored::control::set_override(false);
    }

    info!("taskpad starting");

    let reader = RustylineReader::new().context("Failed to initialize input")?;
    let mut shell = Shell::new(reader, std::io::stdout());

    // both exit reasons are graceful; the shell has already said goodbye
    shell.run()?;

    Ok(())
}
