use super::category::MediaCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLog {
    pub id: i64,
    pub record_date: NaiveDate,
    pub media_url: String,
    #[serde(default)]
    pub caption: String,
    pub category: MediaCategory,
    #[serde(default)]
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLogPayload {
    pub record_date: NaiveDate,
    pub media_url: String,
    pub caption: String,
    pub category: MediaCategory,
}

impl MediaLogPayload {
    pub fn is_valid(&self) -> bool {
        !self.media_url.trim().is_empty()
    }
}
