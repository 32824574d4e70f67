use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaCategory {
    Photo,
    Video,
    Drone,
    Other,
}

impl MediaCategory {
    pub fn code(&self) -> &'static str {
        match self {
            MediaCategory::Photo => "PHOTO",
            MediaCategory::Video => "VIDEO",
            MediaCategory::Drone => "DRONE",
            MediaCategory::Other => "OTHER",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "PHOTO" => Some(MediaCategory::Photo),
            "VIDEO" => Some(MediaCategory::Video),
            "DRONE" => Some(MediaCategory::Drone),
            "OTHER" => Some(MediaCategory::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaCategory::Photo => "Photo",
            MediaCategory::Video => "Video",
            MediaCategory::Drone => "Drone",
            MediaCategory::Other => "Other",
        }
    }
}
