use super::entities::EvaluationTask;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListResponse {
    pub items: Vec<EvaluationTask>,
    pub total: u64,
    pub submitted: u64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmitEvaluationResponse {
    pub evaluation_id: i64,
    pub scores_recorded: u64,
}
