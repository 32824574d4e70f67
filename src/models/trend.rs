use serde::{Deserialize, Serialize};

/// Area-level attachment trend reported by divers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttachmentTrend {
    Stable,
    Decreased,
    Unstable,
}

impl AttachmentTrend {
    pub fn code(&self) -> &'static str {
        match self {
            AttachmentTrend::Stable => "STABLE",
            AttachmentTrend::Decreased => "DECREASED",
            AttachmentTrend::Unstable => "UNSTABLE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "STABLE" => Some(AttachmentTrend::Stable),
            "DECREASED" => Some(AttachmentTrend::Decreased),
            "UNSTABLE" => Some(AttachmentTrend::Unstable),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttachmentTrend::Stable => "Stable",
            AttachmentTrend::Decreased => "Decreased",
            AttachmentTrend::Unstable => "Unstable",
        }
    }
}
