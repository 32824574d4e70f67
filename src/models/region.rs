use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestorationRegion {
    Pohang,
    Uljin,
}

impl RestorationRegion {
    pub fn code(&self) -> &'static str {
        match self {
            RestorationRegion::Pohang => "POHANG",
            RestorationRegion::Uljin => "ULJIN",
        }
    }

    /// Convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "POHANG" => Some(RestorationRegion::Pohang),
            "ULJIN" => Some(RestorationRegion::Uljin),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RestorationRegion::Pohang => "Pohang",
            RestorationRegion::Uljin => "Uljin",
        }
    }
}
