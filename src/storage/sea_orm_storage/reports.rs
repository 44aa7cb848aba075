use super::SeaOrmStorage;
use crate::entity::divisions::Entity as Divisions;
use crate::entity::evaluation_scores::{Column as ScoreColumn, Entity as EvaluationScores};
use crate::entity::evaluations::{Column as EvaluationColumn, Entity as Evaluations};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{PeerEvalError, Result};
use crate::models::reports::entities::{EvaluateeInfo, ReportSource, SubmittedEvaluation};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// Pulls everything the report aggregation needs for one event: the
    /// frozen indicator set, the evaluatees (optionally limited to one
    /// division) and every submitted evaluation with its scores.
    pub async fn fetch_report_source_impl(
        &self,
        event_id: i64,
        division_id: Option<i64>,
    ) -> Result<ReportSource> {
        let snapshots = self.get_event_snapshots_impl(event_id).await?;

        let evaluations = Evaluations::find()
            .filter(EvaluationColumn::EventId.eq(event_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Query evaluations failed: {e}"))
            })?;

        if evaluations.is_empty() {
            return Ok(ReportSource {
                snapshots,
                evaluatees: Vec::new(),
                submissions: Vec::new(),
            });
        }

        let evaluation_ids: Vec<i64> = evaluations.iter().map(|e| e.id).collect();

        let mut scores_by_evaluation: HashMap<i64, Vec<(i64, i32)>> = HashMap::new();
        let score_rows = EvaluationScores::find()
            .filter(ScoreColumn::EvaluationId.is_in(evaluation_ids))
            .all(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Query scores failed: {e}")))?;

        for row in score_rows {
            scores_by_evaluation
                .entry(row.evaluation_id)
                .or_default()
                .push((row.indicator_snapshot_id, row.score));
        }

        // Only assignments whose scores were actually submitted count
        let submissions: Vec<SubmittedEvaluation> = evaluations
            .iter()
            .filter_map(|e| {
                scores_by_evaluation
                    .get(&e.id)
                    .map(|scores| SubmittedEvaluation {
                        evaluator_id: e.evaluator_id,
                        evaluatee_id: e.evaluatee_id,
                        feedback: e.feedback.clone(),
                        scores: scores.clone(),
                    })
            })
            .collect();

        let mut evaluatee_ids: Vec<i64> = submissions.iter().map(|s| s.evaluatee_id).collect();
        evaluatee_ids.sort_unstable();
        evaluatee_ids.dedup();

        let mut users = Users::find().filter(UserColumn::Id.is_in(evaluatee_ids));
        if let Some(division_id) = division_id {
            users = users.filter(UserColumn::DivisionId.eq(division_id));
        }

        let evaluatees: Vec<EvaluateeInfo> = users
            .find_also_related(Divisions)
            .all(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Query evaluatees failed: {e}"))
            })?
            .into_iter()
            .map(|(u, d)| EvaluateeInfo {
                user_id: u.id,
                name: u.name,
                nim: u.nim,
                division_id: u.division_id,
                division_name: d.map(|d| d.name),
            })
            .collect();

        Ok(ReportSource {
            snapshots,
            evaluatees,
            submissions,
        })
    }
}
