use serde::{Deserialize, Serialize};

/// Live status of a single charger as reported by telemetry.
///
/// Only [`ChargerStatus::Available`] counts as free; every other state is
/// treated as unavailable when summarizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargerStatus {
    Available,
    Unavailable,
    Offline,
    #[serde(other)]
    Unknown,
}

impl ChargerStatus {
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, ChargerStatus::Available)
    }
}

/// Charging-speed tier. Variant order is the tier order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChargerLevel {
    #[default]
    Level1,
    Level2,
    DcFast,
}

impl std::fmt::Display for ChargerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChargerLevel::Level1 => write!(f, "Level 1"),
            ChargerLevel::Level2 => write!(f, "Level 2"),
            ChargerLevel::DcFast => write!(f, "DC Fast"),
        }
    }
}

/// One physical charger at a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargerRecord {
    /// Upstream charger identifier, when the feed provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: ChargerStatus,
    pub level: ChargerLevel,
}

impl ChargerRecord {
    #[must_use]
    pub fn new(status: ChargerStatus, level: ChargerLevel) -> Self {
        Self {
            id: None,
            status,
            level,
        }
    }
}
