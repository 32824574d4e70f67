use super::grade::Grade;
use crate::core::sections::SpeciesLog;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A growth measurement row for one species in one area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthLog {
    pub id: i64,
    pub record_date: NaiveDate,
    pub species_id: i64,
    pub species_name: String,
    pub is_representative: bool,
    pub attachment_rate: f64,
    pub survival_rate: f64,
    pub growth_length: f64,
    pub status: Grade,
    #[serde(default)]
    pub status_name: String,
}

impl GrowthLog {
    pub fn from_payload(species_name: &str, payload: &GrowthLogPayload) -> Self {
        Self {
            id: 0,
            record_date: payload.record_date,
            species_id: payload.species_id,
            species_name: species_name.to_string(),
            is_representative: payload.is_representative,
            attachment_rate: payload.attachment_rate,
            survival_rate: payload.survival_rate,
            growth_length: payload.growth_length,
            status: payload.status,
            status_name: payload.status.label().to_string(),
        }
    }
}

impl SpeciesLog for GrowthLog {
    fn species_id(&self) -> i64 {
        self.species_id
    }

    fn species_name(&self) -> &str {
        &self.species_name
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthLogPayload {
    pub species_id: i64,
    pub is_representative: bool,
    pub record_date: NaiveDate,
    pub attachment_rate: f64,
    pub survival_rate: f64,
    pub growth_length: f64,
    pub status: Grade,
}

impl GrowthLogPayload {
    pub fn is_valid(&self) -> bool {
        self.species_id > 0
            && (0.0..=100.0).contains(&self.attachment_rate)
            && (0.0..=100.0).contains(&self.survival_rate)
            && self.growth_length >= 0.0
    }
}
