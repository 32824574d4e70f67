use serde::{Deserialize, Serialize};

/// Field-work activity type carried by review submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Transplant,
    GrazerRemoval,
    SubstrateImprovement,
    Monitoring,
    MarineCleanup,
    Other,
}

impl ActivityType {
    pub fn code(&self) -> &'static str {
        match self {
            ActivityType::Transplant => "TRANSPLANT",
            ActivityType::GrazerRemoval => "GRAZER_REMOVAL",
            ActivityType::SubstrateImprovement => "SUBSTRATE_IMPROVEMENT",
            ActivityType::Monitoring => "MONITORING",
            ActivityType::MarineCleanup => "MARINE_CLEANUP",
            ActivityType::Other => "OTHER",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "TRANSPLANT" => Some(ActivityType::Transplant),
            "GRAZER_REMOVAL" => Some(ActivityType::GrazerRemoval),
            "SUBSTRATE_IMPROVEMENT" => Some(ActivityType::SubstrateImprovement),
            "MONITORING" => Some(ActivityType::Monitoring),
            "MARINE_CLEANUP" => Some(ActivityType::MarineCleanup),
            "OTHER" => Some(ActivityType::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Transplant => "Transplant",
            ActivityType::GrazerRemoval => "Grazer removal",
            ActivityType::SubstrateImprovement => "Substrate improvement",
            ActivityType::Monitoring => "Monitoring",
            ActivityType::MarineCleanup => "Marine cleanup",
            ActivityType::Other => "Other",
        }
    }
}
