use serde::{Deserialize, Serialize};

/// Three-level quality grade shared by species attachment status
/// (transplant logs) and growth status (growth logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    Good,
    Normal,
    Poor,
}

impl Grade {
    pub fn code(&self) -> &'static str {
        match self {
            Grade::Good => "GOOD",
            Grade::Normal => "NORMAL",
            Grade::Poor => "POOR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "GOOD" => Some(Grade::Good),
            "NORMAL" => Some(Grade::Normal),
            "POOR" => Some(Grade::Poor),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Good => "Good",
            Grade::Normal => "Normal",
            Grade::Poor => "Poor",
        }
    }
}
