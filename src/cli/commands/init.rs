use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let api_url = match &cli.command {
        Commands::Init { api_url } => api_url.clone().or_else(|| cli.api.clone()),
        _ => None,
    };

    Config::init_all(api_url, cli.test)?;
    Ok(())
}
