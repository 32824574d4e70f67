//! Server-side export endpoints returning binary downloads.

use super::client::{ApiClient, Blob};
use crate::errors::{AppError, AppResult};
use serde::Serialize;

const CSV_PATH: &str = "/api/admin/exports/download/by-ids";
const PDF_PATH: &str = "/api/admin/reports/drafts/by-ids/pdf";

pub const DEFAULT_REPORT_TYPE: &str = "INTERNAL_DRAFT";

/// CSV of the selected submissions.
/// `POST /api/admin/exports/download/by-ids`
pub fn download_csv_by_ids(client: &ApiClient, ids: &[i64]) -> AppResult<Blob> {
    if ids.is_empty() {
        return Err(AppError::Export("no ids to download".to_string()));
    }

    #[derive(Serialize)]
    struct Body<'a> {
        format: &'static str,
        ids: &'a [i64],
    }

    client.post_blob(
        CSV_PATH,
        &Body {
            format: "CSV",
            ids,
        },
        "text/csv,application/octet-stream",
    )
}

/// Draft report PDF of the selected submissions.
/// `POST /api/admin/reports/drafts/by-ids/pdf`
pub fn download_draft_report_pdf(
    client: &ApiClient,
    ids: &[i64],
    report_type: Option<&str>,
    prompt: Option<&str>,
) -> AppResult<Blob> {
    if ids.is_empty() {
        return Err(AppError::Export("no ids to export as PDF".to_string()));
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body<'a> {
        ids: &'a [i64],
        report_type: &'a str,
        prompt: &'a str,
    }

    client.post_blob(
        PDF_PATH,
        &Body {
            ids,
            report_type: report_type.unwrap_or(DEFAULT_REPORT_TYPE),
            prompt: prompt.unwrap_or(""),
        },
        "application/pdf",
    )
}
