//! Per-area log endpoints.
//!
//! Each log kind lives under its own path segment of
//! `/api/dashboard/areas/{id}/...` and returns a paginated envelope.

use super::client::ApiClient;
use super::envelope::{ApiResponse, Created, Paged};
use crate::errors::AppResult;
use crate::models::environment::{EnvironmentLog, EnvironmentLogPayload};
use crate::models::growth::{GrowthLog, GrowthLogPayload};
use crate::models::log_kind::LogKind;
use crate::models::media::{MediaLog, MediaLogPayload};
use crate::models::transplant::{TransplantLog, TransplantLogPayload};
use serde_json::Value;

fn logs_path(area_id: i64, kind: LogKind) -> String {
    format!("/api/dashboard/areas/{area_id}/{}", kind.path_segment())
}

fn log_path(area_id: i64, kind: LogKind, log_id: i64) -> String {
    format!("{}/{log_id}", logs_path(area_id, kind))
}

// ---------------------------
// Transplant
// ---------------------------

pub fn get_transplant_logs(client: &ApiClient, area_id: i64) -> AppResult<Paged<TransplantLog>> {
    let resp: ApiResponse<Paged<TransplantLog>> =
        client.get(&logs_path(area_id, LogKind::Transplant), &[])?;
    resp.into_data()
}

pub fn post_transplant_log(
    client: &ApiClient,
    area_id: i64,
    payload: &TransplantLogPayload,
) -> AppResult<i64> {
    let resp: ApiResponse<Created> =
        client.post(&logs_path(area_id, LogKind::Transplant), payload)?;
    Ok(resp.into_data()?.id)
}

pub fn patch_transplant_log(
    client: &ApiClient,
    area_id: i64,
    log_id: i64,
    payload: &TransplantLogPayload,
) -> AppResult<()> {
    let resp: ApiResponse<Value> =
        client.patch(&log_path(area_id, LogKind::Transplant, log_id), payload)?;
    resp.ensure_success()
}

// ---------------------------
// Growth
// ---------------------------

pub fn get_growth_logs(client: &ApiClient, area_id: i64) -> AppResult<Paged<GrowthLog>> {
    let resp: ApiResponse<Paged<GrowthLog>> =
        client.get(&logs_path(area_id, LogKind::Growth), &[])?;
    resp.into_data()
}

pub fn post_growth_log(
    client: &ApiClient,
    area_id: i64,
    payload: &GrowthLogPayload,
) -> AppResult<i64> {
    let resp: ApiResponse<Created> = client.post(&logs_path(area_id, LogKind::Growth), payload)?;
    Ok(resp.into_data()?.id)
}

pub fn patch_growth_log(
    client: &ApiClient,
    area_id: i64,
    log_id: i64,
    payload: &GrowthLogPayload,
) -> AppResult<()> {
    let resp: ApiResponse<Value> =
        client.patch(&log_path(area_id, LogKind::Growth, log_id), payload)?;
    resp.ensure_success()
}

// ---------------------------
// Environment (water logs)
// ---------------------------

pub fn get_environment_logs(client: &ApiClient, area_id: i64) -> AppResult<Paged<EnvironmentLog>> {
    let resp: ApiResponse<Paged<EnvironmentLog>> =
        client.get(&logs_path(area_id, LogKind::Environment), &[])?;
    resp.into_data()
}

pub fn post_environment_log(
    client: &ApiClient,
    area_id: i64,
    payload: &EnvironmentLogPayload,
) -> AppResult<i64> {
    let resp: ApiResponse<Created> =
        client.post(&logs_path(area_id, LogKind::Environment), payload)?;
    Ok(resp.into_data()?.id)
}

pub fn patch_environment_log(
    client: &ApiClient,
    area_id: i64,
    log_id: i64,
    payload: &EnvironmentLogPayload,
) -> AppResult<()> {
    let resp: ApiResponse<Value> =
        client.patch(&log_path(area_id, LogKind::Environment, log_id), payload)?;
    resp.ensure_success()
}

// ---------------------------
// Media
// ---------------------------

pub fn get_media_logs(client: &ApiClient, area_id: i64) -> AppResult<Paged<MediaLog>> {
    let resp: ApiResponse<Paged<MediaLog>> =
        client.get(&logs_path(area_id, LogKind::Media), &[])?;
    resp.into_data()
}

pub fn post_media_log(
    client: &ApiClient,
    area_id: i64,
    payload: &MediaLogPayload,
) -> AppResult<i64> {
    let resp: ApiResponse<Created> = client.post(&logs_path(area_id, LogKind::Media), payload)?;
    Ok(resp.into_data()?.id)
}

// ---------------------------
// Shared
// ---------------------------

/// Delete a single log of any kind.
pub fn delete_log(client: &ApiClient, area_id: i64, kind: LogKind, log_id: i64) -> AppResult<()> {
    let resp: ApiResponse<Value> = client.delete(&log_path(area_id, kind, log_id))?;
    resp.ensure_success()
}
