use serde::{Deserialize, Serialize};
use sqlx::Type;

/// Farm status enum matching database enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "farm_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FarmStatus {
    #[default]
    Active,
    Inactive,
    UnderInspection,
    Suspended,
    /// Terminal. Only reachable through `Farm::archive`.
    Archived,
}

impl FarmStatus {
    /// Whether the farm is running day-to-day operations
    pub fn is_operational(self) -> bool {
        matches!(self, FarmStatus::Active | FarmStatus::UnderInspection)
    }

    pub fn is_terminal(self) -> bool {
        self == FarmStatus::Archived
    }
}

impl std::fmt::Display for FarmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FarmStatus::Active => write!(f, "ACTIVE"),
            FarmStatus::Inactive => write!(f, "INACTIVE"),
            FarmStatus::UnderInspection => write!(f, "UNDER_INSPECTION"),
            FarmStatus::Suspended => write!(f, "SUSPENDED"),
            FarmStatus::Archived => write!(f, "ARCHIVED"),
        }
    }
}

/// Irrigation type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "irrigation_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IrrigationType {
    Drip,
    Sprinkler,
    Flood,
    Manual,
    Rainfed,
    Pivot,
}

impl std::fmt::Display for IrrigationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrrigationType::Drip => write!(f, "DRIP"),
            IrrigationType::Sprinkler => write!(f, "SPRINKLER"),
            IrrigationType::Flood => write!(f, "FLOOD"),
            IrrigationType::Manual => write!(f, "MANUAL"),
            IrrigationType::Rainfed => write!(f, "RAINFED"),
            IrrigationType::Pivot => write!(f, "PIVOT"),
        }
    }
}
