//! SeaORM storage implementation.
//!
//! Single database storage layer supporting SQLite, PostgreSQL and MySQL.

mod assignments;
mod audit;
mod divisions;
mod evaluations;
mod events;
mod indicators;
mod periods;
mod prokers;
mod reports;
mod users;

use crate::config::AppConfig;
use crate::errors::{PeerEvalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection with WAL and pragma tuning
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PeerEvalError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                PeerEvalError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// PostgreSQL / MySQL connection
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| PeerEvalError::database_connection(format!("Cannot connect: {e}")))
    }

    /// Infers the backend from the URL and normalizes bare file paths
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PeerEvalError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait implementation
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Users
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_nim(&self, nim: &str) -> Result<Option<User>> {
        self.get_user_by_nim_impl(nim).await
    }

    async fn list_users_with_pagination(&self, query: UserListParams) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // Periods
    async fn create_period(&self, period: CreatePeriodRequest) -> Result<Period> {
        self.create_period_impl(period).await
    }

    async fn get_period_by_id(&self, id: i64) -> Result<Option<Period>> {
        self.get_period_by_id_impl(id).await
    }

    async fn get_active_period(&self) -> Result<Option<Period>> {
        self.get_active_period_impl().await
    }

    async fn list_periods_with_pagination(
        &self,
        query: PeriodListParams,
    ) -> Result<PeriodListResponse> {
        self.list_periods_with_pagination_impl(query).await
    }

    async fn update_period(&self, id: i64, update: UpdatePeriodRequest) -> Result<Option<Period>> {
        self.update_period_impl(id, update).await
    }

    async fn delete_period(&self, id: i64) -> Result<bool> {
        self.delete_period_impl(id).await
    }

    // Divisions
    async fn create_division(&self, division: CreateDivisionRequest) -> Result<Division> {
        self.create_division_impl(division).await
    }

    async fn get_division_by_id(&self, id: i64) -> Result<Option<Division>> {
        self.get_division_by_id_impl(id).await
    }

    async fn list_divisions_with_pagination(
        &self,
        query: DivisionListParams,
    ) -> Result<DivisionListResponse> {
        self.list_divisions_with_pagination_impl(query).await
    }

    async fn update_division(
        &self,
        id: i64,
        update: UpdateDivisionRequest,
    ) -> Result<Option<Division>> {
        self.update_division_impl(id, update).await
    }

    async fn delete_division(&self, id: i64) -> Result<bool> {
        self.delete_division_impl(id).await
    }

    // Prokers
    async fn create_proker(&self, proker: CreateProkerRequest) -> Result<Proker> {
        self.create_proker_impl(proker).await
    }

    async fn get_proker_by_id(&self, id: i64) -> Result<Option<Proker>> {
        self.get_proker_by_id_impl(id).await
    }

    async fn list_prokers_with_pagination(
        &self,
        query: ProkerListParams,
    ) -> Result<ProkerListResponse> {
        self.list_prokers_with_pagination_impl(query).await
    }

    async fn update_proker(&self, id: i64, update: UpdateProkerRequest) -> Result<Option<Proker>> {
        self.update_proker_impl(id, update).await
    }

    async fn delete_proker(&self, id: i64) -> Result<bool> {
        self.delete_proker_impl(id).await
    }

    async fn add_panitia(&self, proker_id: i64, user_id: i64) -> Result<Panitia> {
        self.add_panitia_impl(proker_id, user_id).await
    }

    async fn remove_panitia(&self, proker_id: i64, user_id: i64) -> Result<bool> {
        self.remove_panitia_impl(proker_id, user_id).await
    }

    async fn list_panitia(&self, proker_id: i64) -> Result<Vec<Panitia>> {
        self.list_panitia_impl(proker_id).await
    }

    // Indicators
    async fn create_indicator(&self, indicator: CreateIndicatorRequest) -> Result<Indicator> {
        self.create_indicator_impl(indicator).await
    }

    async fn get_indicator_by_id(&self, id: i64) -> Result<Option<Indicator>> {
        self.get_indicator_by_id_impl(id).await
    }

    async fn get_indicators_by_ids(&self, ids: &[i64]) -> Result<Vec<Indicator>> {
        self.get_indicators_by_ids_impl(ids).await
    }

    async fn list_indicators_with_pagination(
        &self,
        query: IndicatorListParams,
    ) -> Result<IndicatorListResponse> {
        self.list_indicators_with_pagination_impl(query).await
    }

    async fn update_indicator(
        &self,
        id: i64,
        update: UpdateIndicatorRequest,
    ) -> Result<Option<Indicator>> {
        self.update_indicator_impl(id, update).await
    }

    async fn delete_indicator(&self, id: i64) -> Result<bool> {
        self.delete_indicator_impl(id).await
    }

    async fn indicator_in_use(&self, id: i64) -> Result<bool> {
        self.indicator_in_use_impl(id).await
    }

    // Events
    async fn create_event_with_assignments(
        &self,
        event: CreateEventRequest,
    ) -> Result<(Event, u64)> {
        self.create_event_with_assignments_impl(event).await
    }

    async fn get_event_by_id(&self, id: i64) -> Result<Option<Event>> {
        self.get_event_by_id_impl(id).await
    }

    async fn list_events_with_pagination(
        &self,
        query: EventListParams,
    ) -> Result<EventListResponse> {
        self.list_events_with_pagination_impl(query).await
    }

    async fn get_event_snapshots(&self, event_id: i64) -> Result<Vec<IndicatorSnapshot>> {
        self.get_event_snapshots_impl(event_id).await
    }

    async fn count_event_assignments(&self, event_id: i64) -> Result<u64> {
        self.count_event_assignments_impl(event_id).await
    }

    async fn event_has_submissions(&self, event_id: i64) -> Result<bool> {
        self.event_has_submissions_impl(event_id).await
    }

    async fn update_event(&self, id: i64, update: UpdateEventRequest) -> Result<Option<Event>> {
        self.update_event_impl(id, update).await
    }

    async fn delete_event_cascade(&self, id: i64) -> Result<bool> {
        self.delete_event_cascade_impl(id).await
    }

    // Evaluations
    async fn list_my_evaluations(
        &self,
        evaluator_id: i64,
        query: EvaluationListParams,
    ) -> Result<EvaluationListResponse> {
        self.list_my_evaluations_impl(evaluator_id, query).await
    }

    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<EvaluationRecord>> {
        self.get_evaluation_by_id_impl(id).await
    }

    async fn count_scores_for_evaluation(&self, evaluation_id: i64) -> Result<u64> {
        self.count_scores_for_evaluation_impl(evaluation_id).await
    }

    async fn record_evaluation_scores(
        &self,
        evaluation_id: i64,
        scores: &[ScoreEntry],
        feedback: Option<String>,
    ) -> Result<u64> {
        self.record_evaluation_scores_impl(evaluation_id, scores, feedback)
            .await
    }

    // Reports
    async fn fetch_report_source(
        &self,
        event_id: i64,
        division_id: Option<i64>,
    ) -> Result<ReportSource> {
        self.fetch_report_source_impl(event_id, division_id).await
    }

    // Audit
    async fn insert_audit_log(&self, entry: AuditEntry) -> Result<()> {
        self.insert_audit_log_impl(entry).await
    }
}
