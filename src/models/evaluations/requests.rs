use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct ScoreEntry {
    pub indicator_snapshot_id: i64,
    // Integer in [1, 5]
    pub score: i32,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmitEvaluationRequest {
    pub scores: Vec<ScoreEntry>,
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListParams {
    pub event_id: Option<i64>,
    pub pending_only: Option<bool>,
}
