use serde::{Deserialize, Serialize};

/// Sea-state rating used by environment readings (visibility, current,
/// surge, wave).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeaCondition {
    Bad,
    Normal,
    Good,
}

impl SeaCondition {
    pub fn code(&self) -> &'static str {
        match self {
            SeaCondition::Bad => "BAD",
            SeaCondition::Normal => "NORMAL",
            SeaCondition::Good => "GOOD",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BAD" => Some(SeaCondition::Bad),
            "NORMAL" => Some(SeaCondition::Normal),
            "GOOD" => Some(SeaCondition::Good),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeaCondition::Bad => "Bad",
            SeaCondition::Normal => "Normal",
            SeaCondition::Good => "Good",
        }
    }
}
