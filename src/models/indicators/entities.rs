use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Indicator category, reported as separate averages
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/indicator.ts")]
pub enum IndicatorCategory {
    Hard,
    Soft,
    Other,
}

impl IndicatorCategory {
    pub const HARD: &'static str = "HARD";
    pub const SOFT: &'static str = "SOFT";
    pub const OTHER: &'static str = "OTHER";

    pub fn all() -> &'static [IndicatorCategory] {
        &[Self::Hard, Self::Soft, Self::Other]
    }
}

impl<'de> Deserialize<'de> for IndicatorCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            IndicatorCategory::HARD => Ok(IndicatorCategory::Hard),
            IndicatorCategory::SOFT => Ok(IndicatorCategory::Soft),
            IndicatorCategory::OTHER => Ok(IndicatorCategory::Other),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid indicator category: '{s}'. Supported categories: HARD, SOFT, OTHER"
            ))),
        }
    }
}

impl std::fmt::Display for IndicatorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndicatorCategory::Hard => write!(f, "{}", IndicatorCategory::HARD),
            IndicatorCategory::Soft => write!(f, "{}", IndicatorCategory::SOFT),
            IndicatorCategory::Other => write!(f, "{}", IndicatorCategory::OTHER),
        }
    }
}

impl std::str::FromStr for IndicatorCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HARD" => Ok(IndicatorCategory::Hard),
            "SOFT" => Ok(IndicatorCategory::Soft),
            "OTHER" => Ok(IndicatorCategory::Other),
            _ => Err(format!("Invalid indicator category: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/indicator.ts")]
pub struct Indicator {
    pub id: i64,
    pub name: String,
    pub category: IndicatorCategory,
    // Inactive indicators are hidden from new events but stay referenced
    // by existing snapshots
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
