//! reefadmin library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Areas { .. } | Commands::AddArea { .. } | Commands::DelArea { .. } => {
            cli::commands::areas::handle(&cli.command, cfg)
        }
        Commands::Area { .. } => cli::commands::area::handle(&cli.command, cfg),
        Commands::AddLog { .. }
        | Commands::EditLog { .. }
        | Commands::DelLog { .. }
        | Commands::LogExport { .. } => cli::commands::logs::handle(&cli.command, cfg),
        Commands::Species { .. } => cli::commands::species::handle(&cli.command, cfg),
        Commands::Submissions { .. }
        | Commands::Submission { .. }
        | Commands::Approve { .. }
        | Commands::Reject { .. }
        | Commands::DelSub { .. } => cli::commands::submissions::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load();

    // 3. apply the API base override from the command line, if any
    if let Some(api) = &cli.api {
        cfg.api_base_url = api.trim_end_matches('/').to_string();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
