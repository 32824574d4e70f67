use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        ids,
        file,
        prompt,
        report_type,
        force,
    } = cmd
    {
        let client = ApiClient::new(cfg)?;
        ExportLogic::download_by_ids(
            &client,
            format.clone(),
            ids,
            file,
            report_type.as_deref(),
            prompt.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
