use crate::models::events::entities::IndicatorSnapshot;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// A score already recorded for one snapshot of an assignment
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmittedScore {
    pub indicator_snapshot_id: i64,
    pub score: i32,
}

// One assignment as seen by its evaluator, carrying everything the scoring
// form needs: the event, the evaluatee, the frozen indicator set and any
// scores already submitted
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationTask {
    pub id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub evaluatee_id: i64,
    pub evaluatee_name: String,
    pub evaluatee_nim: String,
    pub evaluatee_division: Option<String>,
    pub indicator_snapshots: Vec<IndicatorSnapshot>,
    // True once scores have been recorded for this assignment
    pub is_submitted: bool,
    pub scores: Vec<SubmittedScore>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// Raw assignment row used during submission checks
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationRecord {
    pub id: i64,
    pub evaluator_id: i64,
    pub evaluatee_id: i64,
    pub event_id: i64,
    pub feedback: Option<String>,
}
