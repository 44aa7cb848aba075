use super::SeaOrmStorage;
use crate::entity::divisions::{ActiveModel, Column, Entity as Divisions};
use crate::errors::{PeerEvalError, Result};
use crate::models::{
    PaginationInfo,
    divisions::{
        entities::Division,
        requests::{CreateDivisionRequest, DivisionListParams, UpdateDivisionRequest},
        responses::DivisionListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_division_impl(&self, req: CreateDivisionRequest) -> Result<Division> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            is_oversight: Set(req.is_oversight),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            PeerEvalError::database_operation(format!("Create division failed: {e}"))
        })?;

        Ok(result.into_division())
    }

    pub async fn get_division_by_id_impl(&self, id: i64) -> Result<Option<Division>> {
        let result = Divisions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Query division failed: {e}"))
            })?;

        Ok(result.map(|m| m.into_division()))
    }

    pub async fn list_divisions_with_pagination_impl(
        &self,
        query: DivisionListParams,
    ) -> Result<DivisionListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Divisions::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Count divisions failed: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Count division pages failed: {e}"))
        })?;

        let divisions = paginator.fetch_page(page - 1).await.map_err(|e| {
            PeerEvalError::database_operation(format!("List divisions failed: {e}"))
        })?;

        Ok(DivisionListResponse {
            items: divisions.into_iter().map(|m| m.into_division()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_division_impl(
        &self,
        id: i64,
        update: UpdateDivisionRequest,
    ) -> Result<Option<Division>> {
        let existing = self.get_division_by_id_impl(id).await?;
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

        if let Some(is_oversight) = update.is_oversight {
            model.is_oversight = Set(is_oversight);
        }

        model.update(&self.db).await.map_err(|e| {
            PeerEvalError::database_operation(format!("Update division failed: {e}"))
        })?;

        self.get_division_by_id_impl(id).await
    }

    pub async fn delete_division_impl(&self, id: i64) -> Result<bool> {
        let result = Divisions::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            PeerEvalError::database_operation(format!("Delete division failed: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }
}
