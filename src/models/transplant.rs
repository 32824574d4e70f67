use super::grade::Grade;
use super::method::TransplantMethod;
use crate::core::sections::SpeciesLog;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A transplant log row as returned by the server, with the method parsed
/// into a tagged enum at the API edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransplantLog {
    pub id: i64,
    pub record_date: NaiveDate,
    pub method: TransplantMethod,
    #[serde(default)]
    pub method_name: String,
    #[serde(default)]
    pub method_desc: String,
    #[serde(default)]
    pub unit: String,
    pub species_id: i64,
    pub species_name: String,
    pub count: i64,
    pub area_size: f64,
    pub attachment_status: Grade,
    #[serde(default)]
    pub attachment_status_name: String,
}

impl TransplantLog {
    /// Build a local (not yet persisted) entry from a payload, filling the
    /// display fields the server would normally compute.
    pub fn from_payload(species_name: &str, payload: &TransplantLogPayload) -> Self {
        Self {
            id: 0,
            record_date: payload.record_date,
            method: payload.method,
            method_name: payload.method.label().to_string(),
            method_desc: String::new(),
            unit: payload.method.unit().to_string(),
            species_id: payload.species_id,
            species_name: species_name.to_string(),
            count: payload.count,
            area_size: payload.area_size,
            attachment_status: payload.attachment_status,
            attachment_status_name: payload.attachment_status.label().to_string(),
        }
    }
}

impl SpeciesLog for TransplantLog {
    fn species_id(&self) -> i64 {
        self.species_id
    }

    fn species_name(&self) -> &str {
        &self.species_name
    }
}

/// Create/update payload for a transplant log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransplantLogPayload {
    pub record_date: NaiveDate,
    pub method: TransplantMethod,
    pub species_id: i64,
    pub count: i64,
    pub area_size: f64,
    pub attachment_status: Grade,
}

impl TransplantLogPayload {
    pub fn is_valid(&self) -> bool {
        self.species_id > 0 && self.count >= 0 && self.area_size >= 0.0
    }
}
