use super::SeaOrmStorage;
use crate::entity::divisions::Entity as Divisions;
use crate::entity::evaluation_scores::{
    ActiveModel as ScoreActiveModel, Column as ScoreColumn, Entity as EvaluationScores,
};
use crate::entity::evaluations::{
    ActiveModel as EvaluationActiveModel, Column as EvaluationColumn, Entity as Evaluations,
};
use crate::entity::events::Entity as Events;
use crate::entity::indicator_snapshots::{Column as SnapshotColumn, Entity as Snapshots};
use crate::entity::indicators::Entity as Indicators;
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{PeerEvalError, Result};
use crate::models::evaluations::{
    entities::{EvaluationRecord, EvaluationTask, SubmittedScore},
    requests::{EvaluationListParams, ScoreEntry},
    responses::EvaluationListResponse,
};
use crate::models::events::entities::IndicatorSnapshot;
use crate::models::indicators::entities::IndicatorCategory;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// Assignments of one evaluator, hydrated with evaluatee and event
    /// details plus the submission state.
    pub async fn list_my_evaluations_impl(
        &self,
        evaluator_id: i64,
        query: EvaluationListParams,
    ) -> Result<EvaluationListResponse> {
        let mut select = Evaluations::find().filter(EvaluationColumn::EvaluatorId.eq(evaluator_id));

        if let Some(event_id) = query.event_id {
            select = select.filter(EvaluationColumn::EventId.eq(event_id));
        }

        let evaluations = select
            .order_by_asc(EvaluationColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("List evaluations failed: {e}"))
            })?;

        if evaluations.is_empty() {
            return Ok(EvaluationListResponse {
                items: Vec::new(),
                total: 0,
                submitted: 0,
            });
        }

        let evaluatee_ids: Vec<i64> = evaluations.iter().map(|e| e.evaluatee_id).collect();
        let event_ids: Vec<i64> = evaluations.iter().map(|e| e.event_id).collect();
        let evaluation_ids: Vec<i64> = evaluations.iter().map(|e| e.id).collect();

        let users: HashMap<i64, (String, String, Option<String>)> = Users::find()
            .filter(UserColumn::Id.is_in(evaluatee_ids))
            .find_also_related(Divisions)
            .all(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Query users failed: {e}")))?
            .into_iter()
            .map(|(u, d)| (u.id, (u.name, u.nim, d.map(|d| d.name))))
            .collect();

        let events: HashMap<i64, String> = Events::find()
            .filter(crate::entity::events::Column::Id.is_in(event_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Query events failed: {e}")))?
            .into_iter()
            .map(|e| (e.id, e.name))
            .collect();

        let mut snapshots_by_event: HashMap<i64, Vec<IndicatorSnapshot>> = HashMap::new();
        let snapshot_rows = Snapshots::find()
            .filter(SnapshotColumn::EventId.is_in(event_ids))
            .find_also_related(Indicators)
            .order_by_asc(SnapshotColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Query snapshots failed: {e}"))
            })?;
        for (snap, indicator) in snapshot_rows {
            let Some(ind) = indicator else { continue };
            snapshots_by_event
                .entry(snap.event_id)
                .or_default()
                .push(IndicatorSnapshot {
                    id: snap.id,
                    event_id: snap.event_id,
                    indicator_id: snap.indicator_id,
                    indicator_name: ind.name,
                    category: ind
                        .category
                        .parse::<IndicatorCategory>()
                        .unwrap_or(IndicatorCategory::Other),
                });
        }

        let mut scores_by_evaluation: HashMap<i64, Vec<SubmittedScore>> = HashMap::new();
        let score_rows = EvaluationScores::find()
            .filter(ScoreColumn::EvaluationId.is_in(evaluation_ids))
            .all(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Query scores failed: {e}")))?;
        for row in score_rows {
            scores_by_evaluation
                .entry(row.evaluation_id)
                .or_default()
                .push(SubmittedScore {
                    indicator_snapshot_id: row.indicator_snapshot_id,
                    score: row.score,
                });
        }

        let mut items: Vec<EvaluationTask> = evaluations
            .into_iter()
            .map(|e| {
                let (name, nim, division) = users
                    .get(&e.evaluatee_id)
                    .cloned()
                    .unwrap_or((String::new(), String::new(), None));
                let scores = scores_by_evaluation.remove(&e.id).unwrap_or_default();
                EvaluationTask {
                    id: e.id,
                    event_id: e.event_id,
                    event_name: events.get(&e.event_id).cloned().unwrap_or_default(),
                    evaluatee_id: e.evaluatee_id,
                    evaluatee_name: name,
                    evaluatee_nim: nim,
                    evaluatee_division: division,
                    indicator_snapshots: snapshots_by_event
                        .get(&e.event_id)
                        .cloned()
                        .unwrap_or_default(),
                    is_submitted: !scores.is_empty(),
                    scores,
                    created_at: chrono::DateTime::from_timestamp(e.created_at, 0)
                        .unwrap_or_default(),
                }
            })
            .collect();

        let total = items.len() as u64;
        let submitted = items.iter().filter(|t| t.is_submitted).count() as u64;

        if query.pending_only == Some(true) {
            items.retain(|t| !t.is_submitted);
        }

        Ok(EvaluationListResponse {
            items,
            total,
            submitted,
        })
    }

    pub async fn get_evaluation_by_id_impl(&self, id: i64) -> Result<Option<EvaluationRecord>> {
        let result = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Query evaluation failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_record()))
    }

    pub async fn count_scores_for_evaluation_impl(&self, evaluation_id: i64) -> Result<u64> {
        let count = EvaluationScores::find()
            .filter(ScoreColumn::EvaluationId.eq(evaluation_id))
            .count(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Count scores failed: {e}")))?;

        Ok(count)
    }

    /// Writes all scores plus the feedback in one transaction. The unique
    /// index on (evaluation_id, indicator_snapshot_id) turns a concurrent
    /// duplicate submission into a constraint violation instead of a
    /// double write.
    pub async fn record_evaluation_scores_impl(
        &self,
        evaluation_id: i64,
        scores: &[ScoreEntry],
        feedback: Option<String>,
    ) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Begin transaction failed: {e}"))
        })?;

        let models: Vec<ScoreActiveModel> = scores
            .iter()
            .map(|entry| ScoreActiveModel {
                evaluation_id: Set(evaluation_id),
                indicator_snapshot_id: Set(entry.indicator_snapshot_id),
                score: Set(entry.score),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        let recorded = models.len() as u64;

        if !models.is_empty() {
            EvaluationScores::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| match e {
                    sea_orm::DbErr::Exec(ref inner)
                        if inner.to_string().to_lowercase().contains("unique") =>
                    {
                        PeerEvalError::state_conflict("Scores already recorded")
                    }
                    other => PeerEvalError::database_operation(format!(
                        "Insert scores failed: {other}"
                    )),
                })?;
        }

        let model = EvaluationActiveModel {
            id: Set(evaluation_id),
            feedback: Set(feedback),
            updated_at: Set(now),
            ..Default::default()
        };

        model.update(&txn).await.map_err(|e| {
            PeerEvalError::database_operation(format!("Update evaluation failed: {e}"))
        })?;

        txn.commit().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Commit transaction failed: {e}"))
        })?;

        Ok(recorded)
    }
}
