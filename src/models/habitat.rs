use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitatType {
    Rocky,
    Mixed,
    Other,
}

impl HabitatType {
    pub fn code(&self) -> &'static str {
        match self {
            HabitatType::Rocky => "ROCKY",
            HabitatType::Mixed => "MIXED",
            HabitatType::Other => "OTHER",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "ROCKY" => Some(HabitatType::Rocky),
            "MIXED" => Some(HabitatType::Mixed),
            "OTHER" => Some(HabitatType::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HabitatType::Rocky => "Rocky",
            HabitatType::Mixed => "Mixed",
            HabitatType::Other => "Other",
        }
    }
}
