use crate::api::{self, ApiClient};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::{QueryCache, QueryKey};
use crate::errors::{AppError, AppResult};
use crate::models::area::{AreaFilters, AreaPayload};
use crate::models::habitat::HabitatType;
use crate::models::level::ProjectLevel;
use crate::models::region::RestorationRegion;
use crate::models::trend::AttachmentTrend;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::date;
use crate::utils::table::Table;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Areas {
            page,
            region,
            habitat,
            level,
            from,
            to,
            keyword,
        } => list(cfg, *page, region, habitat, level, from, to, keyword),
        Commands::AddArea {
            name,
            region,
            start,
            end,
            habitat,
            depth,
            area_size,
            level,
            attachment,
            lat,
            lon,
        } => create(
            cfg, name, region, start, end, habitat, *depth, *area_size, level, attachment, *lat,
            *lon,
        ),
        Commands::DelArea { area_id, yes } => delete(cfg, *area_id, *yes),
        _ => Ok(()),
    }
}

#[allow(clippy::too_many_arguments)]
fn list(
    cfg: &Config,
    page: u32,
    region: &Option<String>,
    habitat: &Option<String>,
    level: &Option<String>,
    from: &Option<String>,
    to: &Option<String>,
    keyword: &Option<String>,
) -> AppResult<()> {
    let filters = parse_filters(region, habitat, level, from, to, keyword)?;

    let client = ApiClient::new(cfg)?;
    let mut cache = QueryCache::new(Duration::from_secs(cfg.stale_secs));

    let paged = cache.get_or_fetch(QueryKey::Areas { page }, || {
        api::areas::get_areas(&client, page, &filters)
    })?;

    if paged.content.is_empty() {
        info("No areas found.");
        return Ok(());
    }

    let mut table = Table::new(&[
        "ID", "NAME", "REGION", "START", "HABITAT", "DEPTH", "SIZE", "LEVEL", "TREND",
    ]);
    for area in &paged.content {
        table.add_row(vec![
            area.id.to_string(),
            area.name.clone(),
            area.restoration_region.label().to_string(),
            area.start_date.format("%Y-%m-%d").to_string(),
            area.habitat.label().to_string(),
            format!("{}m", area.depth),
            format!("{}m2", area.area_size),
            area.level.label().to_string(),
            area.attachment_status.label().to_string(),
        ]);
    }
    table.print();

    println!(
        "\nPage {}/{} ({} areas)",
        paged.page.max(page),
        paged.total_pages,
        paged.total_elements
    );
    Ok(())
}

fn parse_filters(
    region: &Option<String>,
    habitat: &Option<String>,
    level: &Option<String>,
    from: &Option<String>,
    to: &Option<String>,
    keyword: &Option<String>,
) -> AppResult<AreaFilters> {
    let mut filters = AreaFilters {
        keyword: keyword.clone(),
        ..AreaFilters::default()
    };

    if let Some(r) = region {
        filters.region =
            Some(RestorationRegion::from_code(r).ok_or_else(|| AppError::InvalidRegion(r.clone()))?);
    }
    if let Some(h) = habitat {
        filters.habitat =
            Some(HabitatType::from_code(h).ok_or_else(|| AppError::InvalidHabitat(h.clone()))?);
    }
    if let Some(l) = level {
        filters.level =
            Some(ProjectLevel::from_code(l).ok_or_else(|| AppError::InvalidLevel(l.clone()))?);
    }
    if let Some(d) = from {
        filters.from = Some(date::parse_ymd(d)?);
    }
    if let Some(d) = to {
        filters.to = Some(date::parse_ymd(d)?);
    }

    Ok(filters)
}

#[allow(clippy::too_many_arguments)]
fn create(
    cfg: &Config,
    name: &str,
    region: &str,
    start: &str,
    end: &Option<String>,
    habitat: &str,
    depth: f64,
    area_size: f64,
    level: &str,
    attachment: &str,
    lat: f64,
    lon: f64,
) -> AppResult<()> {
    let payload = AreaPayload {
        name: name.to_string(),
        restoration_region: RestorationRegion::from_code(region)
            .ok_or_else(|| AppError::InvalidRegion(region.to_string()))?,
        start_date: date::parse_ymd(start)?,
        end_date: end.as_deref().map(date::parse_ymd).transpose()?,
        habitat: HabitatType::from_code(habitat)
            .ok_or_else(|| AppError::InvalidHabitat(habitat.to_string()))?,
        depth,
        area_size,
        level: ProjectLevel::from_code(level)
            .ok_or_else(|| AppError::InvalidLevel(level.to_string()))?,
        attachment_status: AttachmentTrend::from_code(attachment)
            .ok_or_else(|| AppError::InvalidTrend(attachment.to_string()))?,
        lat,
        lon,
    };

    if !payload.is_valid() {
        warning("Area not created: name must not be empty.");
        return Ok(());
    }

    let client = ApiClient::new(cfg)?;
    let id = api::areas::post_area(&client, &payload)?;
    success(format!("Area #{id} '{name}' created."));
    Ok(())
}

fn delete(cfg: &Config, area_id: i64, yes: bool) -> AppResult<()> {
    if !yes && !confirm(&format!("Delete area #{area_id} and all its logs?"))? {
        info("Aborted.");
        return Ok(());
    }

    let client = ApiClient::new(cfg)?;
    api::areas::delete_area(&client, area_id)?;
    success(format!("Area #{area_id} deleted."));
    Ok(())
}
