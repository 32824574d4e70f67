use serde::{Deserialize, Serialize};

/// A seaweed species tracked by the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeciesPayload {
    pub name: String,
}

impl SpeciesPayload {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
