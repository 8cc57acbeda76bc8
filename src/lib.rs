//! rAttendance library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
        Commands::Inspect { .. } => cli::commands::inspect::handle(&cli.command, cfg),
    }
}

/// Configuration file in use: `--config` override or the platform default.
pub fn config_path(cli: &Cli) -> PathBuf {
    match &cli.config {
        Some(p) => utils::path::expand_tilde(&p.to_string_lossy()),
        None => Config::config_file(),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (default se il file manca)
    let path = config_path(&cli);
    let cfg = Config::load(&path)?;

    // 3️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg, &path)
}
