use serde::{Deserialize, Serialize};

/// How a batch of seedlings was fixed to the seabed. Each method has its own
/// quantity unit (strings, meters, anchor points, modules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransplantMethod {
    SeedlingString,
    Rope,
    RockFixation,
    TransplantModule,
    DirectFixation,
}

impl TransplantMethod {
    pub const ALL: [TransplantMethod; 5] = [
        TransplantMethod::SeedlingString,
        TransplantMethod::Rope,
        TransplantMethod::RockFixation,
        TransplantMethod::TransplantModule,
        TransplantMethod::DirectFixation,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TransplantMethod::SeedlingString => "SEEDLING_STRING",
            TransplantMethod::Rope => "ROPE",
            TransplantMethod::RockFixation => "ROCK_FIXATION",
            TransplantMethod::TransplantModule => "TRANSPLANT_MODULE",
            TransplantMethod::DirectFixation => "DIRECT_FIXATION",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "SEEDLING_STRING" => Some(TransplantMethod::SeedlingString),
            "ROPE" => Some(TransplantMethod::Rope),
            "ROCK_FIXATION" => Some(TransplantMethod::RockFixation),
            "TRANSPLANT_MODULE" => Some(TransplantMethod::TransplantModule),
            "DIRECT_FIXATION" => Some(TransplantMethod::DirectFixation),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransplantMethod::SeedlingString => "Seedling string",
            TransplantMethod::Rope => "Rope",
            TransplantMethod::RockFixation => "Rock fixation",
            TransplantMethod::TransplantModule => "Transplant module",
            TransplantMethod::DirectFixation => "Direct fixation",
        }
    }

    /// Unit the `count` field is expressed in for this method.
    pub fn unit(&self) -> &'static str {
        match self {
            TransplantMethod::SeedlingString => "strings",
            TransplantMethod::Rope => "m",
            TransplantMethod::RockFixation => "points",
            TransplantMethod::TransplantModule => "modules",
            TransplantMethod::DirectFixation => "points",
        }
    }
}
