pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::periods::requests::{
    CreatePeriodRequest, PeriodListParams, UpdatePeriodRequest,
};
use crate::storage::Storage;

pub struct PeriodService {
    storage: Option<Arc<dyn Storage>>,
}

impl PeriodService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_periods(
        &self,
        query: PeriodListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_periods(self, query, request).await
    }

    pub async fn create_period(
        &self,
        period_data: CreatePeriodRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_period(self, period_data, request).await
    }

    pub async fn get_period(
        &self,
        period_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_period(self, period_id, request).await
    }

    pub async fn update_period(
        &self,
        period_id: i64,
        update_data: UpdatePeriodRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_period(self, period_id, update_data, request).await
    }

    pub async fn delete_period(
        &self,
        period_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_period(self, period_id, request).await
    }
}
