use serde::{Deserialize, Serialize};

/// Review state of a field submission.
/// Server codes: PENDING, APPROVED, REJECTED, DELETED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
    Deleted,
}

impl ReviewStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "PENDING",
            ReviewStatus::Approved => "APPROVED",
            ReviewStatus::Rejected => "REJECTED",
            ReviewStatus::Deleted => "DELETED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "PENDING" => Some(ReviewStatus::Pending),
            "APPROVED" => Some(ReviewStatus::Approved),
            "REJECTED" => Some(ReviewStatus::Rejected),
            "DELETED" => Some(ReviewStatus::Deleted),
            _ => None,
        }
    }

    /// Lenient parse used when mapping list rows: an unknown or missing
    /// status falls back to Pending instead of failing the whole page.
    pub fn from_code_lenient(code: &str) -> Self {
        Self::from_code(code).unwrap_or(ReviewStatus::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
            ReviewStatus::Deleted => "Deleted",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ReviewStatus::Pending)
    }
}
