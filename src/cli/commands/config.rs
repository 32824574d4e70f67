use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                info(format!("Configuration file: {}", path.display()));
                println!("{content}");
            } else {
                warning("No configuration file found. Run `reefadmin init` first.");
            }
        }

        if *check {
            let missing = Config::missing_keys();
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing configuration keys: {}", missing.join(", ")));
            }
        }
    }
    Ok(())
}
