use super::activity::ActivityType;
use super::review_status::ReviewStatus;
use crate::utils::date;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the admin review list.
///
/// The list endpoint is the loosest part of the server surface, so rows are
/// mapped leniently from raw JSON: missing fields become defaults and an
/// unknown status falls back to Pending instead of failing the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub site: String,
    pub submitted_at: String,
    pub activity: String,
    pub author: String,
    pub attachment_count: i64,
    pub status: ReviewStatus,
}

impl Submission {
    pub fn from_value(row: &Value) -> Self {
        let id = match row.get("submissionId") {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
            Some(Value::String(s)) => s.parse().unwrap_or(0),
            _ => 0,
        };

        let status = row
            .get("status")
            .and_then(Value::as_str)
            .map(ReviewStatus::from_code_lenient)
            .unwrap_or(ReviewStatus::Pending);

        Self {
            id,
            site: str_field(row, "siteName"),
            submitted_at: date::to_date_string(row.get("submittedAt")),
            activity: str_field(row, "activityType"),
            author: str_field(row, "authorName"),
            attachment_count: row
                .get("attachmentCount")
                .and_then(Value::as_i64)
                .unwrap_or(0),
            status,
        }
    }

    pub fn activity_label(&self) -> String {
        match ActivityType::from_code(&self.activity) {
            Some(a) => a.label().to_string(),
            None => self.activity.clone(),
        }
    }
}

fn str_field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Rejection reason, optionally based on a feedback template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_code: Option<String>,
    pub message: String,
}

// ---------------------------
// Detail endpoint
// ---------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDetail {
    pub submission_id: i64,
    pub site_name: String,
    pub activity_type: ActivityType,
    pub record_date: Option<String>,
    pub diving_round: Option<i32>,
    pub work_description: Option<String>,
    pub submitted_at: Value,
    pub status: ReviewStatus,
    pub author_name: String,
    pub author_email: String,
    pub attachment_count: i64,
    pub feedback_text: Option<String>,
    pub basic_env: Option<BasicEnv>,
    pub participants: Option<Participants>,
    pub transplant_activity: Option<TransplantActivity>,
    pub grazer_removal_activity: Option<GrazerRemovalActivity>,
    pub substrate_improvement_activity: Option<SubstrateImprovementActivity>,
    pub monitoring_activity: Option<MonitoringActivity>,
    pub marine_cleanup_activity: Option<MarineCleanupActivity>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub reject_reason: Option<String>,
    #[serde(default)]
    pub audit_logs: Vec<AuditLog>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
}

impl SubmissionDetail {
    pub fn submitted_at_str(&self) -> String {
        date::to_date_string(Some(&self.submitted_at))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicEnv {
    pub record_date: Option<String>,
    pub avg_depth_m: Option<f64>,
    pub max_depth_m: Option<f64>,
    pub water_temp_c: Option<f64>,
    pub visibility_status: Option<String>,
    pub wave_status: Option<String>,
    pub surge_status: Option<String>,
    pub current_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participants {
    pub participant_names: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransplantActivity {
    pub species_type: Option<String>,
    pub location_type: Option<String>,
    pub method_type: Option<String>,
    pub scale: Option<String>,
    pub health_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrazerRemovalActivity {
    #[serde(default)]
    pub target_species: Vec<String>,
    pub density_before_work: Option<String>,
    pub work_scope: Option<String>,
    pub note: Option<String>,
    pub collection_amount: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstrateImprovementActivity {
    pub target_type: Option<String>,
    pub work_scope: Option<String>,
    pub substrate_state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringActivity {
    pub entry_coordinate: Option<String>,
    pub exit_coordinate: Option<String>,
    pub direction: Option<String>,
    pub terrain: Option<String>,
    pub barren_extent: Option<String>,
    pub grazer_distribution: Option<String>,
    #[serde(default)]
    pub rock_features: Vec<String>,
    pub suitability: Option<String>,
    pub seaweed_id_number: Option<String>,
    pub seaweed_health_status: Option<String>,
    pub leaf_length: Option<String>,
    pub max_leaf_width: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineCleanupActivity {
    #[serde(default)]
    pub waste_types: Vec<String>,
    pub method: Option<String>,
    pub collection_amount: Option<String>,
    pub uncollected_scale: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub attachment_id: i64,
    pub file_name: String,
    pub file_url: String,
    pub mime_type: String,
    pub file_size: i64,
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub log_id: i64,
    pub action: String,
    pub performed_by: String,
    pub comment: Option<String>,
    pub created_at: Option<String>,
}
