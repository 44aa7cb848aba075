use super::SeaOrmStorage;
use crate::entity::panitia::{
    ActiveModel as PanitiaActiveModel, Column as PanitiaColumn, Entity as PanitiaEntity,
};
use crate::entity::prokers::{ActiveModel, Column, Entity as Prokers};
use crate::entity::users::Entity as Users;
use crate::errors::{PeerEvalError, Result};
use crate::models::{
    PaginationInfo,
    prokers::{
        entities::{Panitia, Proker},
        requests::{CreateProkerRequest, ProkerListParams, UpdateProkerRequest},
        responses::ProkerListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_proker_impl(&self, req: CreateProkerRequest) -> Result<Proker> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            division_id: Set(req.division_id),
            period_id: Set(req.period_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Create proker failed: {e}")))?;

        Ok(result.into_proker())
    }

    pub async fn get_proker_by_id_impl(&self, id: i64) -> Result<Option<Proker>> {
        let result = Prokers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Query proker failed: {e}")))?;

        Ok(result.map(|m| m.into_proker()))
    }

    pub async fn list_prokers_with_pagination_impl(
        &self,
        query: ProkerListParams,
    ) -> Result<ProkerListResponse> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Prokers::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        if let Some(period_id) = query.period_id {
            select = select.filter(Column::PeriodId.eq(period_id));
        }

        if let Some(division_id) = query.division_id {
            select = select.filter(Column::DivisionId.eq(division_id));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Count prokers failed: {e}")))?;

        let pages = paginator.num_pages().await.map_err(|e| {
            PeerEvalError::database_operation(format!("Count proker pages failed: {e}"))
        })?;

        let prokers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("List prokers failed: {e}")))?;

        Ok(ProkerListResponse {
            items: prokers.into_iter().map(|m| m.into_proker()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_proker_impl(
        &self,
        id: i64,
        update: UpdateProkerRequest,
    ) -> Result<Option<Proker>> {
        let existing = self.get_proker_by_id_impl(id).await?;
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

        if let Some(division_id) = update.division_id {
            model.division_id = Set(division_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Update proker failed: {e}")))?;

        self.get_proker_by_id_impl(id).await
    }

    pub async fn delete_proker_impl(&self, id: i64) -> Result<bool> {
        let result = Prokers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Delete proker failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// Idempotent add: an existing membership is returned unchanged.
    pub async fn add_panitia_impl(&self, proker_id: i64, user_id: i64) -> Result<Panitia> {
        let existing = PanitiaEntity::find()
            .filter(PanitiaColumn::ProkerId.eq(proker_id))
            .filter(PanitiaColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Query panitia failed: {e}")))?;

        let result = match existing {
            Some(model) => model,
            None => {
                let now = chrono::Utc::now().timestamp();
                let model = PanitiaActiveModel {
                    proker_id: Set(proker_id),
                    user_id: Set(user_id),
                    created_at: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    PeerEvalError::database_operation(format!("Add panitia failed: {e}"))
                })?
            }
        };

        let user = Users::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Query user failed: {e}")))?
            .ok_or_else(|| PeerEvalError::not_found(format!("User {user_id} not found")))?;

        Ok(Panitia {
            id: result.id,
            proker_id: result.proker_id,
            user_id: result.user_id,
            user_name: user.name,
            user_nim: user.nim,
            created_at: chrono::DateTime::from_timestamp(result.created_at, 0)
                .unwrap_or_default(),
        })
    }

    pub async fn remove_panitia_impl(&self, proker_id: i64, user_id: i64) -> Result<bool> {
        let result = PanitiaEntity::delete_many()
            .filter(PanitiaColumn::ProkerId.eq(proker_id))
            .filter(PanitiaColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                PeerEvalError::database_operation(format!("Remove panitia failed: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_panitia_impl(&self, proker_id: i64) -> Result<Vec<Panitia>> {
        let rows = PanitiaEntity::find()
            .filter(PanitiaColumn::ProkerId.eq(proker_id))
            .find_also_related(Users)
            .order_by_asc(PanitiaColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("List panitia failed: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(p, user)| {
                user.map(|u| Panitia {
                    id: p.id,
                    proker_id: p.proker_id,
                    user_id: p.user_id,
                    user_name: u.name,
                    user_nim: u.nim,
                    created_at: chrono::DateTime::from_timestamp(p.created_at, 0)
                        .unwrap_or_default(),
                })
            })
            .collect())
    }
}
