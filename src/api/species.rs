//! Species registry endpoints under `/api/bio/species`.

use super::client::ApiClient;
use super::envelope::{ApiResponse, Created};
use crate::errors::AppResult;
use crate::models::species::{Species, SpeciesPayload};
use serde_json::Value;

pub fn fetch_species(client: &ApiClient) -> AppResult<Vec<Species>> {
    let resp: ApiResponse<Vec<Species>> = client.get("/api/bio/species", &[])?;
    resp.into_data()
}

pub fn create_species(client: &ApiClient, payload: &SpeciesPayload) -> AppResult<i64> {
    let resp: ApiResponse<Created> = client.post("/api/bio/species", payload)?;
    Ok(resp.into_data()?.id)
}

pub fn update_species(client: &ApiClient, id: i64, payload: &SpeciesPayload) -> AppResult<()> {
    let resp: ApiResponse<Value> = client.patch(&format!("/api/bio/species/{id}"), payload)?;
    resp.ensure_success()
}

pub fn delete_species(client: &ApiClient, id: i64) -> AppResult<()> {
    let resp: ApiResponse<Value> = client.delete(&format!("/api/bio/species/{id}"))?;
    resp.ensure_success()
}
