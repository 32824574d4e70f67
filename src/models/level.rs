use serde::{Deserialize, Serialize};

/// Project maturity level of a work area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectLevel {
    Observation,
    Settlement,
    Growth,
    Management,
}

impl ProjectLevel {
    pub fn code(&self) -> &'static str {
        match self {
            ProjectLevel::Observation => "OBSERVATION",
            ProjectLevel::Settlement => "SETTLEMENT",
            ProjectLevel::Growth => "GROWTH",
            ProjectLevel::Management => "MANAGEMENT",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "OBSERVATION" => Some(ProjectLevel::Observation),
            "SETTLEMENT" => Some(ProjectLevel::Settlement),
            "GROWTH" => Some(ProjectLevel::Growth),
            "MANAGEMENT" => Some(ProjectLevel::Management),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectLevel::Observation => "Observation",
            ProjectLevel::Settlement => "Settlement",
            ProjectLevel::Growth => "Growth",
            ProjectLevel::Management => "Management",
        }
    }
}
