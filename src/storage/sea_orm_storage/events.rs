use super::SeaOrmStorage;
use super::assignments::{RosterUser, build_periodic_pairs, build_proker_pairs, roster_entry};
use crate::entity::evaluation_scores::{
    Column as ScoreColumn, Entity as EvaluationScores,
};
use crate::entity::evaluations::{
    ActiveModel as EvaluationActiveModel, Column as EvaluationColumn, Entity as Evaluations,
};
use crate::entity::events::{ActiveModel, Column, Entity as Events};
use crate::entity::indicator_snapshots::{
    ActiveModel as SnapshotActiveModel, Column as SnapshotColumn, Entity as Snapshots,
};
use crate::entity::indicators::Entity as Indicators;
use crate::entity::panitia::{Column as PanitiaColumn, Entity as PanitiaEntity};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{PeerEvalError, Result};
use crate::models::{
    PaginationInfo,
    events::{
        entities::{Event, EventType, IndicatorSnapshot},
        requests::{CreateEventRequest, EventListParams, UpdateEventRequest},
        responses::EventListResponse,
    },
    indicators::entities::IndicatorCategory,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// Creates the event, its indicator snapshots and the generated
    /// assignments in one transaction. The unique index on
    /// (evaluator_id, evaluatee_id, event_id) keeps generation idempotent.
    pub async fn create_event_with_assignments_impl(
        &self,
        req: CreateEventRequest,
    ) -> Result<(Event, u64)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Begin transaction failed: {e}"))
        })?;

        let event_model = ActiveModel {
            name: Set(req.name),
            event_type: Set(req.event_type.to_string()),
            period_id: Set(req.period_id),
            proker_id: Set(req.proker_id),
            start_date: Set(req.start_date.timestamp()),
            end_date: Set(req.end_date.timestamp()),
            is_open: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let event = event_model
            .insert(&txn)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Create event failed: {e}")))?;

        // Freeze the indicator set
        let snapshots: Vec<SnapshotActiveModel> = req
            .indicator_ids
            .iter()
            .map(|&indicator_id| SnapshotActiveModel {
                event_id: Set(event.id),
                indicator_id: Set(indicator_id),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        if !snapshots.is_empty() {
            Snapshots::insert_many(snapshots)
                .exec(&txn)
                .await
                .map_err(|e| {
                    PeerEvalError::database_operation(format!("Create snapshots failed: {e}"))
                })?;
        }

        let pairs = match req.event_type {
            EventType::Periodic => {
                let roster = Self::load_periodic_roster(&txn, req.period_id).await?;
                build_periodic_pairs(&roster)
            }
            EventType::Proker => {
                let proker_id = req.proker_id.ok_or_else(|| {
                    PeerEvalError::validation("Proker event without proker_id")
                })?;
                let members =
                    Self::load_committee_members(&txn, proker_id, req.period_id).await?;
                build_proker_pairs(&members)
            }
        };

        let created = Self::bulk_insert_assignments(&txn, event.id, &pairs, now).await?;

        txn.commit().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Commit transaction failed: {e}"))
        })?;

        Ok((event.into_event(), created))
    }

    /// Active users of the period whose stored role is recognized
    async fn load_periodic_roster(
        txn: &DatabaseTransaction,
        period_id: i64,
    ) -> Result<Vec<RosterUser>> {
        let users = Users::find()
            .filter(UserColumn::PeriodId.eq(period_id))
            .filter(UserColumn::IsActive.eq(true))
            .all(txn)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Load roster failed: {e}")))?;

        Ok(users
            .into_iter()
            .filter_map(|u| roster_entry(u.id, &u.role, u.division_id))
            .collect())
    }

    /// Active committee members whose user record belongs to the event's
    /// period
    async fn load_committee_members(
        txn: &DatabaseTransaction,
        proker_id: i64,
        period_id: i64,
    ) -> Result<Vec<i64>> {
        let rows = PanitiaEntity::find()
            .filter(PanitiaColumn::ProkerId.eq(proker_id))
            .find_also_related(Users)
            .all(txn)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Load committee failed: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, user)| user)
            .filter(|u| u.is_active && u.period_id == period_id)
            .map(|u| u.id)
            .collect())
    }

    async fn bulk_insert_assignments(
        txn: &DatabaseTransaction,
        event_id: i64,
        pairs: &[(i64, i64)],
        now: i64,
    ) -> Result<u64> {
        if pairs.is_empty() {
            return Ok(0);
        }

        let models: Vec<EvaluationActiveModel> = pairs
            .iter()
            .map(|&(evaluator_id, evaluatee_id)| EvaluationActiveModel {
                evaluator_id: Set(evaluator_id),
                evaluatee_id: Set(evaluatee_id),
                event_id: Set(event_id),
                feedback: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        let inserted = Evaluations::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    EvaluationColumn::EvaluatorId,
                    EvaluationColumn::EvaluateeId,
                    EvaluationColumn::EventId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(txn)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Insert assignments failed: {e}"))
            })?;

        Ok(inserted)
    }

    pub async fn get_event_by_id_impl(&self, id: i64) -> Result<Option<Event>> {
        let result = Events::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Query event failed: {e}")))?;

        Ok(result.map(|m| m.into_event()))
    }

    pub async fn list_events_with_pagination_impl(
        &self,
        query: EventListParams,
    ) -> Result<EventListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Events::find();

        if let Some(event_type) = query.event_type {
            select = select.filter(Column::EventType.eq(event_type.to_string()));
        }

        if let Some(period_id) = query.period_id {
            select = select.filter(Column::PeriodId.eq(period_id));
        }

        if let Some(is_open) = query.is_open {
            select = select.filter(Column::IsOpen.eq(is_open));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Count events failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Count event pages failed: {e}"))
        })?;

        let events = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("List events failed: {e}")))?;

        Ok(EventListResponse {
            items: events.into_iter().map(|m| m.into_event()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Snapshots with the names and categories of their source indicators
    pub async fn get_event_snapshots_impl(&self, event_id: i64) -> Result<Vec<IndicatorSnapshot>> {
        let rows = Snapshots::find()
            .filter(SnapshotColumn::EventId.eq(event_id))
            .find_also_related(Indicators)
            .order_by_asc(SnapshotColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Query snapshots failed: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(snap, indicator)| {
                indicator.map(|ind| IndicatorSnapshot {
                    id: snap.id,
                    event_id: snap.event_id,
                    indicator_id: snap.indicator_id,
                    indicator_name: ind.name,
                    category: ind
                        .category
                        .parse::<IndicatorCategory>()
                        .unwrap_or(IndicatorCategory::Other),
                })
            })
            .collect())
    }

    pub async fn count_event_assignments_impl(&self, event_id: i64) -> Result<u64> {
        let count = Evaluations::find()
            .filter(EvaluationColumn::EventId.eq(event_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Count assignments failed: {e}"))
            })?;

        Ok(count)
    }

    pub async fn event_has_submissions_impl(&self, event_id: i64) -> Result<bool> {
        let count = EvaluationScores::find()
            .inner_join(Evaluations)
            .filter(EvaluationColumn::EventId.eq(event_id))
            .count(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Count scores failed: {e}")))?;

        Ok(count > 0)
    }

    pub async fn update_event_impl(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>> {
        let existing = self.get_event_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date.timestamp());
        }

        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date.timestamp());
        }

        if let Some(is_open) = update.is_open {
            model.is_open = Set(is_open);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Update event failed: {e}")))?;

        self.get_event_by_id_impl(id).await
    }

    /// Deletes scores, assignments, snapshots and the event itself in one
    /// transaction so a failure never leaves orphaned rows.
    pub async fn delete_event_cascade_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Begin transaction failed: {e}"))
        })?;

        let evaluation_ids: Vec<i64> = Evaluations::find()
            .filter(EvaluationColumn::EventId.eq(id))
            .select_only()
            .column(EvaluationColumn::Id)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Query assignments failed: {e}"))
            })?;

        if !evaluation_ids.is_empty() {
            EvaluationScores::delete_many()
                .filter(ScoreColumn::EvaluationId.is_in(evaluation_ids))
                .exec(&txn)
                .await
                .map_err(|e| {
                    PeerEvalError::database_operation(format!("Delete scores failed: {e}"))
                })?;
        }

        Evaluations::delete_many()
            .filter(EvaluationColumn::EventId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Delete assignments failed: {e}"))
            })?;

        Snapshots::delete_many()
            .filter(SnapshotColumn::EventId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Delete snapshots failed: {e}"))
            })?;

        let result = Events::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Delete event failed: {e}")))?;

        txn.commit().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Commit transaction failed: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }
}
