// src/export/logic.rs

use crate::api::client::{ApiClient, Blob};
use crate::api::{exports, logs};
use crate::core::sections::group_by_species;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::{write_growth_csv, write_transplant_csv};
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::models::log_kind::LogKind;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// High-level logic for server-side exports.
pub struct ExportLogic;

impl ExportLogic {
    /// Download an export for the given submission ids and write it to disk.
    ///
    /// The output name is resolved in order of preference:
    /// explicit `--file`, the server's Content-Disposition filename,
    /// then a deterministic fallback in the current directory.
    pub fn download_by_ids(
        client: &ApiClient,
        format: ExportFormat,
        ids: &[i64],
        file: &Option<String>,
        report_type: Option<&str>,
        prompt: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let blob = match format {
            ExportFormat::Csv => exports::download_csv_by_ids(client, ids)?,
            ExportFormat::Pdf => {
                exports::download_draft_report_pdf(client, ids, report_type, prompt)?
            }
        };

        let path = resolve_output(&format, ids, file, &blob);
        ensure_writable(&path, force)?;
        fs::write(&path, &blob.bytes)?;

        notify_export_success(format.as_str().to_uppercase().as_str(), &path);
        Ok(path)
    }

    /// Fetch an area's logs, group them per species and write a local CSV.
    /// Only the species-grouped kinds can be exported this way.
    pub fn export_area_logs(
        client: &ApiClient,
        area_id: i64,
        kind: LogKind,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        match kind {
            LogKind::Transplant => {
                let paged = logs::get_transplant_logs(client, area_id)?;
                let sections = group_by_species(paged.content);
                write_transplant_csv(&sections, &path)?;
            }
            LogKind::Growth => {
                let paged = logs::get_growth_logs(client, area_id)?;
                let sections = group_by_species(paged.content);
                write_growth_csv(&sections, &path)?;
            }
            LogKind::Environment | LogKind::Media => {
                return Err(AppError::Export(format!(
                    "log kind '{}' has no species grouping to export",
                    kind.as_str()
                )));
            }
        }

        notify_export_success("CSV", &path);
        Ok(path)
    }
}

fn resolve_output(
    format: &ExportFormat,
    ids: &[i64],
    file: &Option<String>,
    blob: &Blob,
) -> PathBuf {
    if let Some(f) = file {
        return expand_tilde(f);
    }
    if let Some(name) = &blob.filename {
        return PathBuf::from(name);
    }
    PathBuf::from(fallback_filename(format, ids))
}

/// Default filename rules when neither `--file` nor the server name apply.
pub fn fallback_filename(format: &ExportFormat, ids: &[i64]) -> String {
    match format {
        ExportFormat::Csv => {
            if ids.len() == 1 {
                format!("submission_{}.csv", ids[0])
            } else {
                format!("submissions_{}_items.csv", ids.len())
            }
        }
        ExportFormat::Pdf => {
            if ids.len() == 1 {
                format!("draft-report_{}.pdf", ids[0])
            } else {
                format!("draft-reports_{}_items.pdf", ids.len())
            }
        }
    }
}
