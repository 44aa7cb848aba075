use super::SeaOrmStorage;
use crate::entity::periods::{ActiveModel, Column, Entity as Periods};
use crate::errors::{PeerEvalError, Result};
use crate::models::{
    PaginationInfo,
    periods::{
        entities::Period,
        requests::{CreatePeriodRequest, PeriodListParams, UpdatePeriodRequest},
        responses::PeriodListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_period_impl(&self, req: CreatePeriodRequest) -> Result<Period> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            start_year: Set(req.start_year),
            end_year: Set(req.end_year),
            is_active: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Create period failed: {e}")))?;

        Ok(result.into_period())
    }

    pub async fn get_period_by_id_impl(&self, id: i64) -> Result<Option<Period>> {
        let result = Periods::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Query period failed: {e}")))?;

        Ok(result.map(|m| m.into_period()))
    }

    pub async fn get_active_period_impl(&self) -> Result<Option<Period>> {
        let result = Periods::find()
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Query active period failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_period()))
    }

    pub async fn list_periods_with_pagination_impl(
        &self,
        query: PeriodListParams,
    ) -> Result<PeriodListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Periods::find();

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        select = select.order_by_desc(Column::StartYear);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Count periods failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Count period pages failed: {e}"))
        })?;

        let periods = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("List periods failed: {e}")))?;

        Ok(PeriodListResponse {
            items: periods.into_iter().map(|m| m.into_period()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Activating a period deactivates all others in the same transaction,
    /// keeping at most one period active.
    pub async fn update_period_impl(
        &self,
        id: i64,
        update: UpdatePeriodRequest,
    ) -> Result<Option<Period>> {
        let existing = self.get_period_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let activate = update.is_active == Some(true);

        let txn = self.db.begin().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Begin transaction failed: {e}"))
        })?;

        if activate {
            Periods::update_many()
                .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
                .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
                .filter(Column::Id.ne(id))
                .filter(Column::IsActive.eq(true))
                .exec(&txn)
                .await
                .map_err(|e| {
                    PeerEvalError::database_operation(format!("Deactivate periods failed: {e}"))
                })?;
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(start_year) = update.start_year {
            model.start_year = Set(start_year);
        }

        if let Some(end_year) = update.end_year {
            model.end_year = Set(end_year);
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Update period failed: {e}")))?;

        txn.commit().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Commit transaction failed: {e}"))
        })?;

        self.get_period_by_id_impl(id).await
    }

    pub async fn delete_period_impl(&self, id: i64) -> Result<bool> {
        let result = Periods::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Delete period failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
