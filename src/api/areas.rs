//! Work-area endpoints under `/api/dashboard/areas`.

use super::client::ApiClient;
use super::envelope::{ApiResponse, Created, Paged};
use crate::errors::AppResult;
use crate::models::area::{AreaDetail, AreaFilters, AreaPayload, AreaSummary};
use serde_json::Value;

pub fn get_areas(
    client: &ApiClient,
    page: u32,
    filters: &AreaFilters,
) -> AppResult<Paged<AreaSummary>> {
    let mut params = vec![("page".to_string(), page.to_string())];
    params.extend(filters.to_params());

    let resp: ApiResponse<Paged<AreaSummary>> = client.get("/api/dashboard/areas", &params)?;
    resp.into_data()
}

pub fn get_area_detail(client: &ApiClient, area_id: i64) -> AppResult<AreaDetail> {
    let resp: ApiResponse<AreaDetail> =
        client.get(&format!("/api/dashboard/areas/{area_id}"), &[])?;
    resp.into_data()
}

pub fn post_area(client: &ApiClient, payload: &AreaPayload) -> AppResult<i64> {
    let resp: ApiResponse<Created> = client.post("/api/dashboard/areas", payload)?;
    Ok(resp.into_data()?.id)
}

pub fn delete_area(client: &ApiClient, area_id: i64) -> AppResult<()> {
    let resp: ApiResponse<Value> = client.delete(&format!("/api/dashboard/areas/{area_id}"))?;
    resp.ensure_success()
}
