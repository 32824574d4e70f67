use clap::ValueEnum;

/// The four per-area log pipelines. Each kind owns its own fetch-and-group
/// cache entry; there is no cross-kind ordering guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum LogKind {
    Transplant,
    Growth,
    Environment,
    Media,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Transplant => "transplant",
            LogKind::Growth => "growth",
            LogKind::Environment => "environment",
            LogKind::Media => "media",
        }
    }

    /// REST path segment under `/api/dashboard/areas/{id}/`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            LogKind::Transplant => "transplants",
            LogKind::Growth => "growths",
            LogKind::Environment => "water-logs",
            LogKind::Media => "media-logs",
        }
    }
}
