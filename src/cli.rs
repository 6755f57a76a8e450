//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// taskpad - menu-driven in-memory todo manager
#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(version, about = "Menu-driven todo manager (state lives in memory for one run)", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
