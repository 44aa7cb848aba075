use crate::models::events::entities::{EventType, IndicatorSnapshot};
use crate::models::indicators::entities::IndicatorCategory;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct CategoryAverage {
    pub category: IndicatorCategory,
    pub average: f64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct IndicatorAverage {
    pub indicator_snapshot_id: i64,
    pub indicator_name: String,
    pub category: IndicatorCategory,
    pub average: f64,
}

// Aggregated result for one evaluatee; raw per-rater scores never leave
// the storage layer
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct UserReport {
    pub user_id: i64,
    pub name: String,
    pub nim: String,
    pub division_id: Option<i64>,
    pub division_name: Option<String>,
    pub rater_count: u64,
    pub overall_average: f64,
    pub category_averages: Vec<CategoryAverage>,
    pub indicator_averages: Vec<IndicatorAverage>,
    // Kept in evaluation order, never attributed to an evaluator
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct EventStats {
    pub total_assignments: u64,
    pub submitted_count: u64,
    pub distinct_evaluators: u64,
    pub distinct_evaluatees: u64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct EventReportResponse {
    pub event_id: i64,
    pub event_name: String,
    pub event_type: EventType,
    pub period_id: i64,
    pub proker_id: Option<i64>,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub indicators: Vec<IndicatorSnapshot>,
    pub stats: EventStats,
    pub reports: Vec<UserReport>,
}
