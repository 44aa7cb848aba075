use super::SeaOrmStorage;
use crate::entity::indicator_snapshots::{
    Column as SnapshotColumn, Entity as IndicatorSnapshots,
};
use crate::entity::indicators::{ActiveModel, Column, Entity as Indicators};
use crate::errors::{PeerEvalError, Result};
use crate::models::{
    PaginationInfo,
    indicators::{
        entities::Indicator,
        requests::{CreateIndicatorRequest, IndicatorListParams, UpdateIndicatorRequest},
        responses::IndicatorListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_indicator_impl(&self, req: CreateIndicatorRequest) -> Result<Indicator> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            category: Set(req.category.to_string()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            PeerEvalError::database_operation(format!("Create indicator failed: {e}"))
        })?;

        Ok(result.into_indicator())
    }

    pub async fn get_indicator_by_id_impl(&self, id: i64) -> Result<Option<Indicator>> {
        let result = Indicators::find_by_id(id).one(&self.db).await.map_err(|e| {
            PeerEvalError::database_operation(format!("Query indicator failed: {e}"))
        })?;

        Ok(result.map(|m| m.into_indicator()))
    }

    pub async fn get_indicators_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Indicator>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Indicators::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Query indicators failed: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_indicator()).collect())
    }

    pub async fn list_indicators_with_pagination_impl(
        &self,
        query: IndicatorListParams,
    ) -> Result<IndicatorListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Indicators::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        if let Some(category) = query.category {
            select = select.filter(Column::Category.eq(category.to_string()));
        }

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Count indicators failed: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Count indicator pages failed: {e}"))
        })?;

        let indicators = paginator.fetch_page(page - 1).await.map_err(|e| {
            PeerEvalError::database_operation(format!("List indicators failed: {e}"))
        })?;

        Ok(IndicatorListResponse {
            items: indicators.into_iter().map(|m| m.into_indicator()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_indicator_impl(
        &self,
        id: i64,
        update: UpdateIndicatorRequest,
    ) -> Result<Option<Indicator>> {
        let existing = self.get_indicator_by_id_impl(id).await?;
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

        if let Some(category) = update.category {
            model.category = Set(category.to_string());
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model.update(&self.db).await.map_err(|e| {
            PeerEvalError::database_operation(format!("Update indicator failed: {e}"))
        })?;

        self.get_indicator_by_id_impl(id).await
    }

    pub async fn delete_indicator_impl(&self, id: i64) -> Result<bool> {
        let result = Indicators::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            PeerEvalError::database_operation(format!("Delete indicator failed: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }

    /// An indicator referenced by any snapshot cannot be deleted
    pub async fn indicator_in_use_impl(&self, id: i64) -> Result<bool> {
        let count = IndicatorSnapshots::find()
            .filter(SnapshotColumn::IndicatorId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Count snapshots failed: {e}"))
            })?;

        Ok(count > 0)
    }
}
