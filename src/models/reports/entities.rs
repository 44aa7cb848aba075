use crate::models::events::entities::IndicatorSnapshot;

// Raw per-rater data pulled from storage for one event, aggregated by the
// report service before anything leaves the API

#[derive(Debug, Clone)]
pub struct EvaluateeInfo {
    pub user_id: i64,
    pub name: String,
    pub nim: String,
    pub division_id: Option<i64>,
    pub division_name: Option<String>,
}

// One completed evaluation: every snapshot scored, optional feedback
#[derive(Debug, Clone)]
pub struct SubmittedEvaluation {
    pub evaluator_id: i64,
    pub evaluatee_id: i64,
    pub feedback: Option<String>,
    // (indicator_snapshot_id, score)
    pub scores: Vec<(i64, i32)>,
}

#[derive(Debug, Clone)]
pub struct ReportSource {
    pub snapshots: Vec<IndicatorSnapshot>,
    pub evaluatees: Vec<EvaluateeInfo>,
    pub submissions: Vec<SubmittedEvaluation>,
}
