use crate::api::{self, ApiClient};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::{QueryCache, QueryKey};
use crate::core::filters::{SortDir, StatusFilter, SubmissionFilters};
use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityType;
use crate::models::submission::{Reason, SubmissionDetail};
use crate::ui::messages::{confirm, field, header, info, success};
use crate::utils::table::Table;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Submissions {
            page,
            page_size,
            status,
            keyword,
            activity,
            from,
            to,
            sort_by,
            sort_dir,
        } => {
            let filters = build_filters(status, keyword, activity, from, to, sort_by, sort_dir)?;
            list(cfg, *page, page_size.unwrap_or(cfg.page_size), &filters)
        }
        Commands::Submission { id } => detail(cfg, *id),
        Commands::Approve { ids } => approve(cfg, ids),
        Commands::Reject {
            ids,
            message,
            template,
        } => reject(cfg, ids, message, template),
        Commands::DelSub { ids, yes } => delete(cfg, ids, *yes),
        _ => Ok(()),
    }
}

#[allow(clippy::too_many_arguments)]
fn build_filters(
    status: &str,
    keyword: &Option<String>,
    activity: &Option<String>,
    from: &Option<String>,
    to: &Option<String>,
    sort_by: &Option<String>,
    sort_dir: &Option<String>,
) -> AppResult<SubmissionFilters> {
    let activity = activity
        .as_deref()
        .map(|a| ActivityType::from_code(a).ok_or_else(|| AppError::InvalidActivity(a.to_string())))
        .transpose()?;

    let sort_dir = sort_dir.as_deref().map(SortDir::parse).transpose()?;

    Ok(SubmissionFilters {
        status: StatusFilter::parse(status)?,
        keyword: keyword.clone(),
        activity,
        date_from: from.clone(),
        date_to: to.clone(),
        sort_by: sort_by.clone(),
        sort_dir,
    })
}

fn list(cfg: &Config, page: u32, page_size: u32, filters: &SubmissionFilters) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;
    let mut cache = QueryCache::new(Duration::from_secs(cfg.stale_secs));

    let result = cache.get_or_fetch(
        QueryKey::Submissions {
            page,
            signature: filters.signature(),
        },
        || api::submissions::fetch_submissions(&client, page, page_size, filters),
    )?;

    if result.items.is_empty() {
        info("No submissions found.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "SITE", "DATE", "ACTIVITY", "AUTHOR", "FILES", "STATUS"]);
    for s in &result.items {
        table.add_row(vec![
            s.id.to_string(),
            s.site.clone(),
            s.submitted_at.clone(),
            s.activity_label(),
            s.author.clone(),
            s.attachment_count.to_string(),
            s.status.label().to_string(),
        ]);
    }
    table.print();

    println!("\n{} submissions total", result.total);
    Ok(())
}

fn detail(cfg: &Config, id: i64) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;
    let d = api::submissions::get_submission_detail(&client, id)?;
    render_detail(&d);
    Ok(())
}

fn render_detail(d: &SubmissionDetail) {
    header(format!("Submission #{} - {}", d.submission_id, d.site_name));
    field("Activity", d.activity_type.label());
    field("Status", d.status.label());
    field("Author", format!("{} <{}>", d.author_name, d.author_email));
    field("Submitted", d.submitted_at_str());
    if let Some(date) = &d.record_date {
        field("Record date", date);
    }
    if let Some(round) = d.diving_round {
        field("Diving round", round);
    }
    if let Some(desc) = &d.work_description {
        field("Description", desc);
    }
    field("Attachments", d.attachment_count);
    if let Some(reason) = &d.reject_reason {
        field("Reject reason", reason);
    }

    if let Some(env) = &d.basic_env {
        header("Environment");
        if let Some(v) = env.avg_depth_m {
            field("Avg depth", format!("{v}m"));
        }
        if let Some(v) = env.max_depth_m {
            field("Max depth", format!("{v}m"));
        }
        if let Some(v) = env.water_temp_c {
            field("Water temp", format!("{v}C"));
        }
        if let Some(v) = &env.visibility_status {
            field("Visibility", v);
        }
        if let Some(v) = &env.wave_status {
            field("Wave", v);
        }
        if let Some(v) = &env.surge_status {
            field("Surge", v);
        }
        if let Some(v) = &env.current_status {
            field("Current", v);
        }
    }

    if let Some(p) = &d.participants
        && let Some(names) = &p.participant_names
    {
        header("Participants");
        field("Divers", names);
    }

    if let Some(t) = &d.transplant_activity {
        header("Transplant");
        opt_field("Species", &t.species_type);
        opt_field("Location", &t.location_type);
        opt_field("Method", &t.method_type);
        opt_field("Scale", &t.scale);
        opt_field("Health", &t.health_status);
    }

    if let Some(g) = &d.grazer_removal_activity {
        header("Grazer removal");
        if !g.target_species.is_empty() {
            field("Targets", g.target_species.join(", "));
        }
        opt_field("Density", &g.density_before_work);
        opt_field("Scope", &g.work_scope);
        opt_field("Collected", &g.collection_amount);
        opt_field("Note", &g.note);
    }

    if let Some(s) = &d.substrate_improvement_activity {
        header("Substrate improvement");
        opt_field("Target", &s.target_type);
        opt_field("Scope", &s.work_scope);
        opt_field("State", &s.substrate_state);
    }

    if let Some(m) = &d.monitoring_activity {
        header("Monitoring");
        opt_field("Entry", &m.entry_coordinate);
        opt_field("Exit", &m.exit_coordinate);
        opt_field("Direction", &m.direction);
        opt_field("Terrain", &m.terrain);
        opt_field("Barren extent", &m.barren_extent);
        opt_field("Grazers", &m.grazer_distribution);
        if !m.rock_features.is_empty() {
            field("Rock features", m.rock_features.join(", "));
        }
        opt_field("Suitability", &m.suitability);
        opt_field("Seaweed id", &m.seaweed_id_number);
        opt_field("Seaweed health", &m.seaweed_health_status);
        opt_field("Leaf length", &m.leaf_length);
        opt_field("Max leaf width", &m.max_leaf_width);
    }

    if let Some(c) = &d.marine_cleanup_activity {
        header("Marine cleanup");
        if !c.waste_types.is_empty() {
            field("Waste", c.waste_types.join(", "));
        }
        opt_field("Method", &c.method);
        opt_field("Collected", &c.collection_amount);
        opt_field("Uncollected", &c.uncollected_scale);
    }

    if !d.attachments.is_empty() {
        header("Attachments");
        let mut table = Table::new(&["ID", "NAME", "TYPE", "SIZE"]);
        for a in &d.attachments {
            table.add_row(vec![
                a.attachment_id.to_string(),
                a.file_name.clone(),
                a.mime_type.clone(),
                a.file_size.to_string(),
            ]);
        }
        table.print();
    }

    if !d.audit_logs.is_empty() {
        header("Audit log");
        let mut table = Table::new(&["ACTION", "BY", "COMMENT", "AT"]);
        for log in &d.audit_logs {
            table.add_row(vec![
                log.action.clone(),
                log.performed_by.clone(),
                log.comment.clone().unwrap_or_default(),
                log.created_at.clone().unwrap_or_default(),
            ]);
        }
        table.print();
    }
}

fn opt_field(label: &str, value: &Option<String>) {
    if let Some(v) = value {
        field(label, v);
    }
}

fn approve(cfg: &Config, ids: &[i64]) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;

    if ids.len() == 1 {
        api::submissions::approve_submission(&client, ids[0])?;
    } else {
        api::submissions::bulk_approve(&client, ids)?;
    }

    success(format!("{} submission(s) approved.", ids.len()));
    Ok(())
}

fn reject(cfg: &Config, ids: &[i64], message: &str, template: &Option<String>) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;
    let reason = Reason {
        template_code: template.clone(),
        message: message.to_string(),
    };

    if ids.len() == 1 {
        api::submissions::reject_submission(&client, ids[0], &reason)?;
    } else {
        api::submissions::bulk_reject(&client, ids, &reason)?;
    }

    success(format!("{} submission(s) rejected.", ids.len()));
    Ok(())
}

fn delete(cfg: &Config, ids: &[i64], yes: bool) -> AppResult<()> {
    if !yes && !confirm(&format!("Delete {} submission(s)?", ids.len()))? {
        info("Aborted.");
        return Ok(());
    }

    let client = ApiClient::new(cfg)?;

    if ids.len() == 1 {
        api::submissions::delete_submission(&client, ids[0])?;
    } else {
        api::submissions::bulk_delete(&client, ids)?;
    }

    success(format!("{} submission(s) deleted.", ids.len()));
    Ok(())
}
