//! Log mutations: the optimistic add flow, in-place edit, deletion and
//! local CSV export.
//!
//! `add-log` follows the full consumer cycle: fetch through the cache,
//! apply the edit to local section state, fire the create request, then
//! invalidate the cached query and reconcile from a fresh fetch.

use super::area::{
    render_environment_logs, render_growth_sections, render_media_logs,
    render_transplant_sections,
};
use crate::api::{self, ApiClient};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::{KeyScope, QueryCache, QueryKey};
use crate::core::store::SectionStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::category::MediaCategory;
use crate::models::condition::SeaCondition;
use crate::models::environment::EnvironmentLogPayload;
use crate::models::grade::Grade;
use crate::models::growth::{GrowthLog, GrowthLogPayload};
use crate::models::log_kind::LogKind;
use crate::models::media::MediaLogPayload;
use crate::models::method::TransplantMethod;
use crate::models::species::Species;
use crate::models::transplant::{TransplantLog, TransplantLogPayload};
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::date;
use chrono::NaiveDate;
use std::time::Duration;

/// Flags of `add-log`/`edit-log` that vary by kind, already destructured.
pub struct AddLogArgs<'a> {
    pub date: NaiveDate,
    pub species: Option<i64>,
    pub method: &'a Option<String>,
    pub count: Option<i64>,
    pub area_size: Option<f64>,
    pub status: &'a Option<String>,
    pub representative: bool,
    pub attachment_rate: Option<f64>,
    pub survival_rate: Option<f64>,
    pub growth_length: Option<f64>,
    pub temperature: Option<f64>,
    pub oxygen: Option<f64>,
    pub nutrient: Option<f64>,
    pub visibility: &'a Option<String>,
    pub current: &'a Option<String>,
    pub surge: &'a Option<String>,
    pub wave: &'a Option<String>,
    pub url: &'a Option<String>,
    pub caption: &'a Option<String>,
    pub category: &'a Option<String>,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::AddLog {
            area_id,
            kind,
            date,
            species,
            method,
            count,
            area_size,
            status,
            representative,
            attachment_rate,
            survival_rate,
            growth_length,
            temperature,
            oxygen,
            nutrient,
            visibility,
            current,
            surge,
            wave,
            url,
            caption,
            category,
        } => {
            let args = AddLogArgs {
                date: date::parse_ymd(date)?,
                species: *species,
                method,
                count: *count,
                area_size: *area_size,
                status,
                representative: *representative,
                attachment_rate: *attachment_rate,
                survival_rate: *survival_rate,
                growth_length: *growth_length,
                temperature: *temperature,
                oxygen: *oxygen,
                nutrient: *nutrient,
                visibility,
                current,
                surge,
                wave,
                url,
                caption,
                category,
            };
            add(cfg, *area_id, *kind, &args)
        }
        Commands::EditLog {
            area_id,
            kind,
            log_id,
            date,
            species,
            method,
            count,
            area_size,
            status,
            representative,
            attachment_rate,
            survival_rate,
            growth_length,
            temperature,
            oxygen,
            nutrient,
            visibility,
            current,
            surge,
            wave,
        } => {
            let none: Option<String> = None;
            let args = AddLogArgs {
                date: date::parse_ymd(date)?,
                species: *species,
                method,
                count: *count,
                area_size: *area_size,
                status,
                representative: *representative,
                attachment_rate: *attachment_rate,
                survival_rate: *survival_rate,
                growth_length: *growth_length,
                temperature: *temperature,
                oxygen: *oxygen,
                nutrient: *nutrient,
                visibility,
                current,
                surge,
                wave,
                url: &none,
                caption: &none,
                category: &none,
            };
            edit(cfg, *area_id, *kind, *log_id, &args)
        }
        Commands::DelLog {
            area_id,
            kind,
            log_id,
            yes,
        } => delete(cfg, *area_id, *kind, *log_id, *yes),
        Commands::LogExport {
            area_id,
            kind,
            file,
            force,
        } => {
            let client = ApiClient::new(cfg)?;
            ExportLogic::export_area_logs(&client, *area_id, *kind, file, *force)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

// ---------------------------
// Payload builders
// ---------------------------
// Ok(None) means required flags are absent: the callers treat that as a
// silent no-op, like submitting an incomplete form. Present-but-invalid
// codes are hard errors.

fn transplant_payload(args: &AddLogArgs) -> AppResult<Option<TransplantLogPayload>> {
    let (Some(species_id), Some(method), Some(status)) = (args.species, args.method, args.status)
    else {
        return Ok(None);
    };

    Ok(Some(TransplantLogPayload {
        record_date: args.date,
        method: TransplantMethod::from_code(method)
            .ok_or_else(|| AppError::InvalidMethod(method.clone()))?,
        species_id,
        count: args.count.unwrap_or(0),
        area_size: args.area_size.unwrap_or(0.0),
        attachment_status: Grade::from_code(status)
            .ok_or_else(|| AppError::InvalidGrade(status.clone()))?,
    }))
}

fn growth_payload(args: &AddLogArgs) -> AppResult<Option<GrowthLogPayload>> {
    let (Some(species_id), Some(status)) = (args.species, args.status) else {
        return Ok(None);
    };

    Ok(Some(GrowthLogPayload {
        species_id,
        is_representative: args.representative,
        record_date: args.date,
        attachment_rate: args.attachment_rate.unwrap_or(0.0),
        survival_rate: args.survival_rate.unwrap_or(0.0),
        growth_length: args.growth_length.unwrap_or(0.0),
        status: Grade::from_code(status).ok_or_else(|| AppError::InvalidGrade(status.clone()))?,
    }))
}

fn environment_payload(args: &AddLogArgs) -> AppResult<Option<EnvironmentLogPayload>> {
    let (Some(visibility), Some(current), Some(surge), Some(wave)) =
        (args.visibility, args.current, args.surge, args.wave)
    else {
        return Ok(None);
    };

    Ok(Some(EnvironmentLogPayload {
        record_date: args.date,
        temperature: args.temperature.unwrap_or(0.0),
        dissolved_oxygen: args.oxygen.unwrap_or(0.0),
        nutrient: args.nutrient.unwrap_or(0.0),
        visibility: parse_condition(visibility)?,
        current: parse_condition(current)?,
        surge: parse_condition(surge)?,
        wave: parse_condition(wave)?,
    }))
}

fn media_payload(args: &AddLogArgs) -> AppResult<Option<MediaLogPayload>> {
    let (Some(url), Some(category)) = (args.url, args.category) else {
        return Ok(None);
    };

    Ok(Some(MediaLogPayload {
        record_date: args.date,
        media_url: url.clone(),
        caption: args.caption.clone().unwrap_or_default(),
        category: MediaCategory::from_code(category)
            .ok_or_else(|| AppError::InvalidCategory(category.clone()))?,
    }))
}

// ---------------------------
// Add
// ---------------------------

fn add(cfg: &Config, area_id: i64, kind: LogKind, args: &AddLogArgs) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;
    let mut cache = QueryCache::new(Duration::from_secs(cfg.stale_secs));

    match kind {
        LogKind::Transplant => add_transplant(&client, &mut cache, area_id, args),
        LogKind::Growth => add_growth(&client, &mut cache, area_id, args),
        LogKind::Environment => add_environment(&client, &mut cache, area_id, args),
        LogKind::Media => add_media(&client, &mut cache, area_id, args),
    }
}

fn add_transplant(
    client: &ApiClient,
    cache: &mut QueryCache,
    area_id: i64,
    args: &AddLogArgs,
) -> AppResult<()> {
    let Some(payload) = transplant_payload(args)? else {
        warning("Transplant log ignored: --species, --method and --status are required.");
        return Ok(());
    };

    let Some(species) = lookup_species(client, cache, payload.species_id)? else {
        warning(format!(
            "Transplant log ignored: unknown species #{}.",
            payload.species_id
        ));
        return Ok(());
    };

    if !payload.is_valid() {
        warning("Transplant log ignored: invalid field values.");
        return Ok(());
    }

    let key = QueryKey::AreaLogs {
        area_id,
        kind: LogKind::Transplant,
    };
    let paged = cache.get_or_fetch(key.clone(), || {
        api::logs::get_transplant_logs(client, area_id)
    })?;
    let mut store = SectionStore::from_logs(paged.content);

    // Optimistic local append; a species not seen before opens a new
    // section at the end.
    let entry = TransplantLog::from_payload(&species.name, &payload);
    let outcome = if store.contains_species(species.id) {
        store.add_log(entry)
    } else {
        store.add_species(entry)
    };
    if !outcome.applied() {
        warning("Transplant log ignored.");
        return Ok(());
    }

    let log_id = api::logs::post_transplant_log(client, area_id, &payload)?;

    // The create round-tripped: drop the stale page and rebuild sections
    // from the authoritative list.
    cache.invalidate(&KeyScope::AreaLogs(area_id, LogKind::Transplant));
    let fresh = cache.get_or_fetch(key, || api::logs::get_transplant_logs(client, area_id))?;
    store.reconcile(fresh.content);

    render_transplant_sections(store.sections());
    success(format!(
        "Transplant log #{log_id} recorded for {}.",
        species.name
    ));
    Ok(())
}

fn add_growth(
    client: &ApiClient,
    cache: &mut QueryCache,
    area_id: i64,
    args: &AddLogArgs,
) -> AppResult<()> {
    let Some(payload) = growth_payload(args)? else {
        warning("Growth log ignored: --species and --status are required.");
        return Ok(());
    };

    let Some(species) = lookup_species(client, cache, payload.species_id)? else {
        warning(format!(
            "Growth log ignored: unknown species #{}.",
            payload.species_id
        ));
        return Ok(());
    };

    if !payload.is_valid() {
        warning("Growth log ignored: rates must be within 0-100.");
        return Ok(());
    }

    let key = QueryKey::AreaLogs {
        area_id,
        kind: LogKind::Growth,
    };
    let paged = cache.get_or_fetch(key.clone(), || api::logs::get_growth_logs(client, area_id))?;
    let mut store = SectionStore::from_logs(paged.content);

    let entry = GrowthLog::from_payload(&species.name, &payload);
    let outcome = if store.contains_species(species.id) {
        store.add_log(entry)
    } else {
        store.add_species(entry)
    };
    if !outcome.applied() {
        warning("Growth log ignored.");
        return Ok(());
    }

    let log_id = api::logs::post_growth_log(client, area_id, &payload)?;

    cache.invalidate(&KeyScope::AreaLogs(area_id, LogKind::Growth));
    let fresh = cache.get_or_fetch(key, || api::logs::get_growth_logs(client, area_id))?;
    store.reconcile(fresh.content);

    render_growth_sections(store.sections());
    success(format!(
        "Growth log #{log_id} recorded for {}.",
        species.name
    ));
    Ok(())
}

fn add_environment(
    client: &ApiClient,
    cache: &mut QueryCache,
    area_id: i64,
    args: &AddLogArgs,
) -> AppResult<()> {
    let Some(payload) = environment_payload(args)? else {
        warning(
            "Environment log ignored: --visibility, --current, --surge and --wave are required.",
        );
        return Ok(());
    };

    if !payload.is_valid() {
        warning("Environment log ignored: invalid field values.");
        return Ok(());
    }

    let log_id = api::logs::post_environment_log(client, area_id, &payload)?;

    cache.invalidate(&KeyScope::AreaLogs(area_id, LogKind::Environment));
    let fresh = cache.get_or_fetch(
        QueryKey::AreaLogs {
            area_id,
            kind: LogKind::Environment,
        },
        || api::logs::get_environment_logs(client, area_id),
    )?;

    render_environment_logs(&fresh.content);
    success(format!("Environment log #{log_id} recorded."));
    Ok(())
}

fn add_media(
    client: &ApiClient,
    cache: &mut QueryCache,
    area_id: i64,
    args: &AddLogArgs,
) -> AppResult<()> {
    let Some(payload) = media_payload(args)? else {
        warning("Media log ignored: --url and --category are required.");
        return Ok(());
    };

    if !payload.is_valid() {
        warning("Media log ignored: URL must not be empty.");
        return Ok(());
    }

    let log_id = api::logs::post_media_log(client, area_id, &payload)?;

    cache.invalidate(&KeyScope::AreaLogs(area_id, LogKind::Media));
    let fresh = cache.get_or_fetch(
        QueryKey::AreaLogs {
            area_id,
            kind: LogKind::Media,
        },
        || api::logs::get_media_logs(client, area_id),
    )?;

    render_media_logs(&fresh.content);
    success(format!("Media log #{log_id} recorded."));
    Ok(())
}

// ---------------------------
// Edit / delete
// ---------------------------

fn edit(cfg: &Config, area_id: i64, kind: LogKind, log_id: i64, args: &AddLogArgs) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;
    let mut cache = QueryCache::new(Duration::from_secs(cfg.stale_secs));
    let key = QueryKey::AreaLogs { area_id, kind };

    match kind {
        LogKind::Transplant => {
            let Some(payload) = transplant_payload(args)? else {
                warning("Edit ignored: --species, --method and --status are required.");
                return Ok(());
            };
            api::logs::patch_transplant_log(&client, area_id, log_id, &payload)?;

            cache.invalidate(&KeyScope::AreaLogs(area_id, kind));
            let fresh =
                cache.get_or_fetch(key, || api::logs::get_transplant_logs(&client, area_id))?;
            render_transplant_sections(SectionStore::from_logs(fresh.content).sections());
        }
        LogKind::Growth => {
            let Some(payload) = growth_payload(args)? else {
                warning("Edit ignored: --species and --status are required.");
                return Ok(());
            };
            api::logs::patch_growth_log(&client, area_id, log_id, &payload)?;

            cache.invalidate(&KeyScope::AreaLogs(area_id, kind));
            let fresh = cache.get_or_fetch(key, || api::logs::get_growth_logs(&client, area_id))?;
            render_growth_sections(SectionStore::from_logs(fresh.content).sections());
        }
        LogKind::Environment => {
            let Some(payload) = environment_payload(args)? else {
                warning("Edit ignored: --visibility, --current, --surge and --wave are required.");
                return Ok(());
            };
            api::logs::patch_environment_log(&client, area_id, log_id, &payload)?;

            cache.invalidate(&KeyScope::AreaLogs(area_id, kind));
            let fresh =
                cache.get_or_fetch(key, || api::logs::get_environment_logs(&client, area_id))?;
            render_environment_logs(&fresh.content);
        }
        LogKind::Media => {
            warning("Media logs cannot be edited; delete and re-add instead.");
            return Ok(());
        }
    }

    success(format!("{} log #{log_id} updated.", kind.as_str()));
    Ok(())
}

fn delete(cfg: &Config, area_id: i64, kind: LogKind, log_id: i64, yes: bool) -> AppResult<()> {
    if !yes
        && !confirm(&format!(
            "Delete {} log #{log_id} from area #{area_id}?",
            kind.as_str()
        ))?
    {
        info("Aborted.");
        return Ok(());
    }

    let client = ApiClient::new(cfg)?;
    api::logs::delete_log(&client, area_id, kind, log_id)?;
    success(format!("{} log #{log_id} deleted.", kind.as_str()));
    Ok(())
}

fn parse_condition(code: &str) -> AppResult<SeaCondition> {
    SeaCondition::from_code(code).ok_or_else(|| AppError::InvalidCondition(code.to_string()))
}

/// Resolve a species id against the registry (cached). Unknown ids make the
/// whole add a no-op, like picking nothing in the species dropdown.
fn lookup_species(
    client: &ApiClient,
    cache: &mut QueryCache,
    species_id: i64,
) -> AppResult<Option<Species>> {
    let all = cache.get_or_fetch(QueryKey::Species, || api::species::fetch_species(client))?;
    Ok(all.into_iter().find(|s| s.id == species_id))
}
