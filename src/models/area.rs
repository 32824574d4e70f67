use super::habitat::HabitatType;
use super::level::ProjectLevel;
use super::region::RestorationRegion;
use super::trend::AttachmentTrend;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dashboard list row for a work area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSummary {
    pub id: i64,
    pub name: String,
    pub restoration_region: RestorationRegion,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub habitat: HabitatType,
    pub depth: f64,
    pub area_size: f64,
    pub level: ProjectLevel,
    pub attachment_status: AttachmentTrend,
    pub lat: f64,
    pub lon: f64,
}

/// Overview block of the area detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaOverview {
    pub name: String,
    pub area_id: i64,
    pub restoration_region: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current_status: AreaStatus,
    pub area_size: f64,
    pub avg_depth: f64,
    pub habitat_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaStatus {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaDetail {
    pub id: i64,
    pub overview: AreaOverview,
}

/// Create payload for a new work area.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaPayload {
    pub name: String,
    pub restoration_region: RestorationRegion,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub habitat: HabitatType,
    pub depth: f64,
    pub area_size: f64,
    pub level: ProjectLevel,
    pub attachment_status: AttachmentTrend,
    pub lat: f64,
    pub lon: f64,
}

impl AreaPayload {
    /// Required-field check that the types cannot enforce.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Filters for the area list endpoint. Empty fields are omitted from the
/// request query, matching the server contract.
#[derive(Debug, Clone, Default)]
pub struct AreaFilters {
    pub region: Option<RestorationRegion>,
    pub habitat: Option<HabitatType>,
    pub level: Option<ProjectLevel>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub keyword: Option<String>,
}

impl AreaFilters {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(r) = self.region {
            params.push(("region".into(), r.code().into()));
        }
        if let Some(h) = self.habitat {
            params.push(("habitat".into(), h.code().into()));
        }
        if let Some(l) = self.level {
            params.push(("level".into(), l.code().into()));
        }
        if let Some(d) = self.from {
            params.push(("from".into(), d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.to {
            params.push(("to".into(), d.format("%Y-%m-%d").to_string()));
        }
        if let Some(k) = &self.keyword
            && !k.trim().is_empty()
        {
            params.push(("keyword".into(), k.trim().to_string()));
        }
        params
    }
}
