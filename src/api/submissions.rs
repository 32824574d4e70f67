//! Review submission endpoints under `/api/admin/submissions`.

use super::client::ApiClient;
use super::envelope::ApiResponse;
use crate::core::filters::{SubmissionFilters, to_zero_based_page};
use crate::errors::{AppError, AppResult};
use crate::models::submission::{Reason, Submission, SubmissionDetail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const LIST_PATH: &str = "/api/admin/submissions";

/// Application error code the server raises when it cannot apply a status
/// filter. The list call retries once without the filter on this code.
const STATUS_FILTER_ERROR_CODE: &str = "C001";

/// Mapped submission list page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionPage {
    pub items: Vec<Submission>,
    pub total: u64,
}

/// List submissions with normalized filters.
///
/// `page` is 1-based as typed on the CLI; the server expects 0-based. When
/// the server answers HTTP 500 with code C001 while a status filter was
/// sent, the request is repeated once with the status parameter removed.
pub fn fetch_submissions(
    client: &ApiClient,
    page: u32,
    page_size: u32,
    filters: &SubmissionFilters,
) -> AppResult<SubmissionPage> {
    let mut params = vec![
        ("page".to_string(), to_zero_based_page(page).to_string()),
        ("size".to_string(), page_size.to_string()),
    ];
    params.extend(filters.to_params());

    let had_status = params.iter().any(|(k, _)| k == "status");

    match list_once(client, &params) {
        Err(AppError::Server {
            status: 500,
            code: Some(code),
            ..
        }) if code == STATUS_FILTER_ERROR_CODE && had_status => {
            params.retain(|(k, _)| k != "status");
            list_once(client, &params)
        }
        other => other,
    }
}

fn list_once(client: &ApiClient, params: &[(String, String)]) -> AppResult<SubmissionPage> {
    let raw: Value = client.get(LIST_PATH, params)?;
    Ok(map_page(&raw))
}

/// Map the raw list envelope leniently: rows with missing fields become
/// defaults rather than failing the page.
fn map_page(raw: &Value) -> SubmissionPage {
    let paged = raw.get("data");

    let items: Vec<Submission> = paged
        .and_then(|d| d.get("content"))
        .and_then(Value::as_array)
        .map(|rows| rows.iter().map(Submission::from_value).collect())
        .unwrap_or_default();

    let total = paged
        .and_then(|d| d.get("totalElements"))
        .and_then(Value::as_u64)
        .unwrap_or(items.len() as u64);

    SubmissionPage { items, total }
}

pub fn get_submission_detail(client: &ApiClient, id: i64) -> AppResult<SubmissionDetail> {
    let resp: ApiResponse<SubmissionDetail> = client.get(&format!("{LIST_PATH}/{id}"), &[])?;
    resp.into_data()
}

// ---------------------------
// Single mutations
// ---------------------------

pub fn approve_submission(client: &ApiClient, id: i64) -> AppResult<()> {
    let resp: ApiResponse<Value> = client.post_empty(&format!("{LIST_PATH}/{id}/approve"))?;
    resp.ensure_success()
}

pub fn reject_submission(client: &ApiClient, id: i64, reason: &Reason) -> AppResult<()> {
    #[derive(Serialize)]
    struct Body<'a> {
        reason: &'a Reason,
    }

    let resp: ApiResponse<Value> =
        client.post(&format!("{LIST_PATH}/{id}/reject"), &Body { reason })?;
    resp.ensure_success()
}

pub fn delete_submission(client: &ApiClient, id: i64) -> AppResult<()> {
    let resp: ApiResponse<Value> = client.delete(&format!("{LIST_PATH}/{id}"))?;
    resp.ensure_success()
}

// ---------------------------
// Bulk mutations
// ---------------------------

#[derive(Serialize)]
struct IdsBody<'a> {
    ids: &'a [i64],
}

pub fn bulk_approve(client: &ApiClient, ids: &[i64]) -> AppResult<()> {
    let resp: ApiResponse<Value> =
        client.post(&format!("{LIST_PATH}/bulk/approve"), &IdsBody { ids })?;
    resp.ensure_success()
}

pub fn bulk_reject(client: &ApiClient, ids: &[i64], reason: &Reason) -> AppResult<()> {
    #[derive(Serialize)]
    struct Body<'a> {
        ids: &'a [i64],
        reason: &'a Reason,
    }

    let resp: ApiResponse<Value> =
        client.post(&format!("{LIST_PATH}/bulk/reject"), &Body { ids, reason })?;
    resp.ensure_success()
}

pub fn bulk_delete(client: &ApiClient, ids: &[i64]) -> AppResult<()> {
    let resp: ApiResponse<Value> =
        client.delete_with_body(&format!("{LIST_PATH}/bulk"), &IdsBody { ids })?;
    resp.ensure_success()
}
