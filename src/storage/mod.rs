use std::sync::Arc;

use crate::models::{
    audit::AuditEntry,
    divisions::{
        entities::Division,
        requests::{CreateDivisionRequest, DivisionListParams, UpdateDivisionRequest},
        responses::DivisionListResponse,
    },
    evaluations::{
        entities::EvaluationRecord,
        requests::{EvaluationListParams, ScoreEntry},
        responses::EvaluationListResponse,
    },
    events::{
        entities::{Event, IndicatorSnapshot},
        requests::{CreateEventRequest, EventListParams, UpdateEventRequest},
        responses::EventListResponse,
    },
    indicators::{
        entities::Indicator,
        requests::{CreateIndicatorRequest, IndicatorListParams, UpdateIndicatorRequest},
        responses::IndicatorListResponse,
    },
    periods::{
        entities::Period,
        requests::{CreatePeriodRequest, PeriodListParams, UpdatePeriodRequest},
        responses::PeriodListResponse,
    },
    prokers::{
        entities::{Panitia, Proker},
        requests::{CreateProkerRequest, ProkerListParams, UpdateProkerRequest},
        responses::ProkerListResponse,
    },
    reports::entities::ReportSource,
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListParams},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// User management
    // Password in the request is already hashed by the caller
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_nim(&self, nim: &str) -> Result<Option<User>>;
    async fn list_users_with_pagination(&self, query: UserListParams) -> Result<UserListResponse>;
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn count_users(&self) -> Result<u64>;

    /// Period management
    async fn create_period(&self, period: CreatePeriodRequest) -> Result<Period>;
    async fn get_period_by_id(&self, id: i64) -> Result<Option<Period>>;
    async fn get_active_period(&self) -> Result<Option<Period>>;
    async fn list_periods_with_pagination(
        &self,
        query: PeriodListParams,
    ) -> Result<PeriodListResponse>;
    // Activating a period deactivates every other one in the same transaction
    async fn update_period(&self, id: i64, update: UpdatePeriodRequest) -> Result<Option<Period>>;
    async fn delete_period(&self, id: i64) -> Result<bool>;

    /// Division management
    async fn create_division(&self, division: CreateDivisionRequest) -> Result<Division>;
    async fn get_division_by_id(&self, id: i64) -> Result<Option<Division>>;
    async fn list_divisions_with_pagination(
        &self,
        query: DivisionListParams,
    ) -> Result<DivisionListResponse>;
    async fn update_division(
        &self,
        id: i64,
        update: UpdateDivisionRequest,
    ) -> Result<Option<Division>>;
    async fn delete_division(&self, id: i64) -> Result<bool>;

    /// Proker and committee management
    async fn create_proker(&self, proker: CreateProkerRequest) -> Result<Proker>;
    async fn get_proker_by_id(&self, id: i64) -> Result<Option<Proker>>;
    async fn list_prokers_with_pagination(
        &self,
        query: ProkerListParams,
    ) -> Result<ProkerListResponse>;
    async fn update_proker(&self, id: i64, update: UpdateProkerRequest) -> Result<Option<Proker>>;
    async fn delete_proker(&self, id: i64) -> Result<bool>;
    async fn add_panitia(&self, proker_id: i64, user_id: i64) -> Result<Panitia>;
    async fn remove_panitia(&self, proker_id: i64, user_id: i64) -> Result<bool>;
    async fn list_panitia(&self, proker_id: i64) -> Result<Vec<Panitia>>;

    /// Indicator management
    async fn create_indicator(&self, indicator: CreateIndicatorRequest) -> Result<Indicator>;
    async fn get_indicator_by_id(&self, id: i64) -> Result<Option<Indicator>>;
    async fn get_indicators_by_ids(&self, ids: &[i64]) -> Result<Vec<Indicator>>;
    async fn list_indicators_with_pagination(
        &self,
        query: IndicatorListParams,
    ) -> Result<IndicatorListResponse>;
    async fn update_indicator(
        &self,
        id: i64,
        update: UpdateIndicatorRequest,
    ) -> Result<Option<Indicator>>;
    async fn delete_indicator(&self, id: i64) -> Result<bool>;
    // Snapshots referencing an indicator block its deletion
    async fn indicator_in_use(&self, id: i64) -> Result<bool>;

    /// Event management
    // Creates the event, freezes its indicator set and bulk-inserts the
    // generated assignments, all in one transaction
    async fn create_event_with_assignments(&self, event: CreateEventRequest)
    -> Result<(Event, u64)>;
    async fn get_event_by_id(&self, id: i64) -> Result<Option<Event>>;
    async fn list_events_with_pagination(&self, query: EventListParams) -> Result<EventListResponse>;
    async fn get_event_snapshots(&self, event_id: i64) -> Result<Vec<IndicatorSnapshot>>;
    async fn count_event_assignments(&self, event_id: i64) -> Result<u64>;
    // True once any assignment of the event has scores recorded
    async fn event_has_submissions(&self, event_id: i64) -> Result<bool>;
    async fn update_event(&self, id: i64, update: UpdateEventRequest) -> Result<Option<Event>>;
    // Deletes scores, assignments, snapshots and the event in one transaction
    async fn delete_event_cascade(&self, id: i64) -> Result<bool>;

    /// Evaluation submission
    async fn list_my_evaluations(
        &self,
        evaluator_id: i64,
        query: EvaluationListParams,
    ) -> Result<EvaluationListResponse>;
    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<EvaluationRecord>>;
    async fn count_scores_for_evaluation(&self, evaluation_id: i64) -> Result<u64>;
    // Inserts all scores and the feedback atomically; the unique index on
    // (evaluation_id, indicator_snapshot_id) rejects concurrent duplicates
    async fn record_evaluation_scores(
        &self,
        evaluation_id: i64,
        scores: &[ScoreEntry],
        feedback: Option<String>,
    ) -> Result<u64>;

    /// Reporting
    async fn fetch_report_source(
        &self,
        event_id: i64,
        division_id: Option<i64>,
    ) -> Result<ReportSource>;

    /// Audit trail
    async fn insert_audit_log(&self, entry: AuditEntry) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
