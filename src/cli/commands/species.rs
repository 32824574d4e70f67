use crate::api::{self, ApiClient};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::species::SpeciesPayload;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Species {
        add,
        rename,
        name,
        del,
    } = cmd
    {
        let client = ApiClient::new(cfg)?;

        if let Some(new_name) = add {
            return create(&client, new_name);
        }
        if let Some(id) = rename {
            let Some(new_name) = name else {
                warning("--rename requires --name.");
                return Ok(());
            };
            return update(&client, *id, new_name);
        }
        if let Some(id) = del {
            api::species::delete_species(&client, *id)?;
            success(format!("Species #{id} deleted."));
            return Ok(());
        }

        list(&client)?;
    }
    Ok(())
}

fn list(client: &ApiClient) -> AppResult<()> {
    let species = api::species::fetch_species(client)?;
    if species.is_empty() {
        info("No species registered.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "NAME"]);
    for s in &species {
        table.add_row(vec![s.id.to_string(), s.name.clone()]);
    }
    table.print();
    Ok(())
}

fn create(client: &ApiClient, name: &str) -> AppResult<()> {
    let payload = SpeciesPayload {
        name: name.to_string(),
    };
    if !payload.is_valid() {
        warning("Species not created: name must not be empty.");
        return Ok(());
    }

    let id = api::species::create_species(client, &payload)?;
    success(format!("Species #{id} '{name}' created."));
    Ok(())
}

fn update(client: &ApiClient, id: i64, name: &str) -> AppResult<()> {
    let payload = SpeciesPayload {
        name: name.to_string(),
    };
    if !payload.is_valid() {
        warning("Species not renamed: name must not be empty.");
        return Ok(());
    }

    api::species::update_species(client, id, &payload)?;
    success(format!("Species #{id} renamed to '{name}'."));
    Ok(())
}
