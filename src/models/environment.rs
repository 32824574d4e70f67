use super::condition::SeaCondition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A water/environment reading for an area. Environment logs are not tied
/// to a species, so they render as a flat chronological table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentLog {
    pub id: i64,
    pub record_date: NaiveDate,
    pub temperature: f64,
    pub dissolved_oxygen: f64,
    pub nutrient: f64,
    pub visibility: SeaCondition,
    #[serde(default)]
    pub visibility_name: String,
    pub current: SeaCondition,
    #[serde(default)]
    pub current_name: String,
    pub surge: SeaCondition,
    #[serde(default)]
    pub surge_name: String,
    pub wave: SeaCondition,
    #[serde(default)]
    pub wave_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentLogPayload {
    pub record_date: NaiveDate,
    pub temperature: f64,
    pub dissolved_oxygen: f64,
    pub nutrient: f64,
    pub visibility: SeaCondition,
    pub current: SeaCondition,
    pub surge: SeaCondition,
    pub wave: SeaCondition,
}

impl EnvironmentLogPayload {
    pub fn is_valid(&self) -> bool {
        self.dissolved_oxygen >= 0.0 && self.nutrient >= 0.0
    }
}
