pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::indicators::requests::{
    CreateIndicatorRequest, IndicatorListParams, UpdateIndicatorRequest,
};
use crate::storage::Storage;

pub struct IndicatorService {
    storage: Option<Arc<dyn Storage>>,
}

impl IndicatorService {
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

    pub async fn list_indicators(
        &self,
        query: IndicatorListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_indicators(self, query, request).await
    }

    pub async fn create_indicator(
        &self,
        indicator_data: CreateIndicatorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_indicator(self, indicator_data, request).await
    }

    pub async fn get_indicator(
        &self,
        indicator_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_indicator(self, indicator_id, request).await
    }

    pub async fn update_indicator(
        &self,
        indicator_id: i64,
        update_data: UpdateIndicatorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_indicator(self, indicator_id, update_data, request).await
    }

    pub async fn delete_indicator(
        &self,
        indicator_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_indicator(self, indicator_id, request).await
    }
}
