//! hourlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Flow;
use cli::parser::{Cli, Commands, normalize_legacy_flags};
use config::Config;
use errors::AppResult;
use store::EntryStore;
use tracing::level_filters::LevelFilter;

/// Central command dispatcher, shared by one-shot mode and the shell
pub fn dispatch(cmd: &Commands, cfg: &Config, store: &mut EntryStore) -> AppResult<Flow> {
    match cmd {
        Commands::Add { .. } => cli::commands::add::handle(cmd, cfg, store)?,
        Commands::Remove { .. } => cli::commands::remove::handle(cmd, cfg, store)?,
        Commands::List { .. } => cli::commands::list::handle(cmd, cfg, store)?,
        Commands::Clear => cli::commands::clear::handle()?,
        Commands::Config { .. } => cli::commands::config::handle(cmd, cfg)?,
        Commands::Exit => {
            cli::commands::exit::handle(cfg, store)?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

/// Resolve the configuration: file (unless `--test`), then CLI overrides.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(data) = &cli.data {
        cfg.data_file = data.clone();
    }
    if let Some(week_start) = cli.week_start {
        cfg.week_start = week_start;
    }

    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args()));

    if cli.log {
        utils::logging::enable_logging(LevelFilter::DEBUG);
    }

    // 2️⃣ load config once, with command-line overrides
    let cfg = resolve_config(&cli)?;

    // 3️⃣ the store is read once and handed to every command
    let mut store = crate::core::logic::Core::open_store(&cfg)?;

    match &cli.command {
        Some(cmd) => dispatch(cmd, &cfg, &mut store).map(|_| ()),
        None => cli::commands::shell::run(&cfg, &mut store),
    }
}
