use crate::api::{self, ApiClient};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::{QueryCache, QueryKey};
use crate::core::sections::SpeciesSection;
use crate::core::store::SectionStore;
use crate::errors::AppResult;
use crate::models::environment::EnvironmentLog;
use crate::models::growth::GrowthLog;
use crate::models::log_kind::LogKind;
use crate::models::media::MediaLog;
use crate::models::transplant::TransplantLog;
use crate::ui::messages::{field, header, info};
use crate::utils::table::Table;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Area {
        area_id,
        logs,
        without_species,
    } = cmd
    {
        let client = ApiClient::new(cfg)?;
        let mut cache = QueryCache::new(Duration::from_secs(cfg.stale_secs));

        show_overview(&client, &mut cache, *area_id)?;

        let kinds: Vec<LogKind> = match logs {
            Some(kind) => vec![*kind],
            None => vec![
                LogKind::Transplant,
                LogKind::Growth,
                LogKind::Environment,
                LogKind::Media,
            ],
        };

        for kind in kinds {
            match kind {
                LogKind::Transplant => {
                    show_transplants(&client, &mut cache, *area_id, *without_species)?
                }
                LogKind::Growth => show_growth(&client, &mut cache, *area_id, *without_species)?,
                LogKind::Environment => show_environment(&client, &mut cache, *area_id)?,
                LogKind::Media => show_media(&client, &mut cache, *area_id)?,
            }
        }
    }
    Ok(())
}

fn show_overview(client: &ApiClient, cache: &mut QueryCache, area_id: i64) -> AppResult<()> {
    let detail = cache.get_or_fetch(QueryKey::AreaDetail { area_id }, || {
        api::areas::get_area_detail(client, area_id)
    })?;

    let o = &detail.overview;
    header(format!("Area #{} - {}", detail.id, o.name));
    field("Region", &o.restoration_region);
    field("Habitat", &o.habitat_type);
    field("Start", o.start_date.format("%Y-%m-%d"));
    if let Some(end) = o.end_date {
        field("End", end.format("%Y-%m-%d"));
    }
    field("Size", format!("{}m2", o.area_size));
    field("Avg depth", format!("{}m", o.avg_depth));
    field(
        "Status",
        format!("{} - {}", o.current_status.name, o.current_status.description),
    );
    Ok(())
}

fn show_transplants(
    client: &ApiClient,
    cache: &mut QueryCache,
    area_id: i64,
    without_species: Option<i64>,
) -> AppResult<()> {
    let paged = cache.get_or_fetch(
        QueryKey::AreaLogs {
            area_id,
            kind: LogKind::Transplant,
        },
        || api::logs::get_transplant_logs(client, area_id),
    )?;

    header("Transplant logs");
    let mut store = SectionStore::from_logs(paged.content);
    if let Some(species_id) = without_species {
        store.remove_species(species_id);
    }
    render_transplant_sections(store.sections());
    Ok(())
}

fn show_growth(
    client: &ApiClient,
    cache: &mut QueryCache,
    area_id: i64,
    without_species: Option<i64>,
) -> AppResult<()> {
    let paged = cache.get_or_fetch(
        QueryKey::AreaLogs {
            area_id,
            kind: LogKind::Growth,
        },
        || api::logs::get_growth_logs(client, area_id),
    )?;

    header("Growth logs");
    let mut store = SectionStore::from_logs(paged.content);
    if let Some(species_id) = without_species {
        store.remove_species(species_id);
    }
    render_growth_sections(store.sections());
    Ok(())
}

fn show_environment(client: &ApiClient, cache: &mut QueryCache, area_id: i64) -> AppResult<()> {
    let paged = cache.get_or_fetch(
        QueryKey::AreaLogs {
            area_id,
            kind: LogKind::Environment,
        },
        || api::logs::get_environment_logs(client, area_id),
    )?;

    header("Environment logs");
    render_environment_logs(&paged.content);
    Ok(())
}

fn show_media(client: &ApiClient, cache: &mut QueryCache, area_id: i64) -> AppResult<()> {
    let paged = cache.get_or_fetch(
        QueryKey::AreaLogs {
            area_id,
            kind: LogKind::Media,
        },
        || api::logs::get_media_logs(client, area_id),
    )?;

    header("Media logs");
    render_media_logs(&paged.content);
    Ok(())
}

// ---------------------------
// Renderers (shared with the log commands)
// ---------------------------

pub(crate) fn render_transplant_sections(sections: &[SpeciesSection<TransplantLog>]) {
    if sections.is_empty() {
        info("No species recorded yet.");
        return;
    }

    for section in sections {
        let total_count: i64 = section.logs.iter().map(|l| l.count).sum();
        let total_area: f64 = section.logs.iter().map(|l| l.area_size).sum();
        let unit = section
            .logs
            .first()
            .map(|l| l.method.unit())
            .unwrap_or_default();

        println!(
            "\n{} (#{}) - {} records, {} {}, {}m2",
            section.species_name,
            section.species_id,
            section.logs.len(),
            total_count,
            unit,
            total_area
        );

        let mut table = Table::new(&["DATE", "METHOD", "COUNT", "AREA", "ATTACHMENT"]);
        for log in &section.logs {
            table.add_row(vec![
                log.record_date.format("%Y-%m-%d").to_string(),
                log.method.label().to_string(),
                format!("{} {}", log.count, log.method.unit()),
                format!("{}m2", log.area_size),
                log.attachment_status.label().to_string(),
            ]);
        }
        table.print();
    }
}

pub(crate) fn render_growth_sections(sections: &[SpeciesSection<GrowthLog>]) {
    if sections.is_empty() {
        info("No species recorded yet.");
        return;
    }

    for section in sections {
        println!(
            "\n{} (#{}) - {} records",
            section.species_name,
            section.species_id,
            section.logs.len()
        );

        let mut table = Table::new(&["DATE", "REP", "ATTACH%", "SURVIVAL%", "LENGTH", "STATUS"]);
        for log in &section.logs {
            table.add_row(vec![
                log.record_date.format("%Y-%m-%d").to_string(),
                if log.is_representative { "*" } else { "" }.to_string(),
                log.attachment_rate.to_string(),
                log.survival_rate.to_string(),
                format!("{}cm", log.growth_length),
                log.status.label().to_string(),
            ]);
        }
        table.print();
    }
}

pub(crate) fn render_environment_logs(logs: &[EnvironmentLog]) {
    if logs.is_empty() {
        info("No environment readings yet.");
        return;
    }

    let mut table = Table::new(&[
        "DATE", "TEMP", "O2", "NUTRIENT", "VISIBILITY", "CURRENT", "SURGE", "WAVE",
    ]);
    for log in logs {
        table.add_row(vec![
            log.record_date.format("%Y-%m-%d").to_string(),
            format!("{}C", log.temperature),
            log.dissolved_oxygen.to_string(),
            log.nutrient.to_string(),
            log.visibility.label().to_string(),
            log.current.label().to_string(),
            log.surge.label().to_string(),
            log.wave.label().to_string(),
        ]);
    }
    table.print();
}

pub(crate) fn render_media_logs(logs: &[MediaLog]) {
    if logs.is_empty() {
        info("No media captured yet.");
        return;
    }

    let mut table = Table::new(&["DATE", "CATEGORY", "CAPTION", "URL"]);
    for log in logs {
        table.add_row(vec![
            log.record_date.format("%Y-%m-%d").to_string(),
            log.category.label().to_string(),
            log.caption.clone(),
            log.media_url.clone(),
        ]);
    }
    table.print();
}
