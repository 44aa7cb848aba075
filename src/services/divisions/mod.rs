pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::divisions::requests::{
    CreateDivisionRequest, DivisionListParams, UpdateDivisionRequest,
};
use crate::storage::Storage;

pub struct DivisionService {
    storage: Option<Arc<dyn Storage>>,
}

impl DivisionService {
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

    pub async fn list_divisions(
        &self,
        query: DivisionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_divisions(self, query, request).await
    }

    pub async fn create_division(
        &self,
        division_data: CreateDivisionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_division(self, division_data, request).await
    }

    pub async fn get_division(
        &self,
        division_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_division(self, division_id, request).await
    }

    pub async fn update_division(
        &self,
        division_id: i64,
        update_data: UpdateDivisionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_division(self, division_id, update_data, request).await
    }

    pub async fn delete_division(
        &self,
        division_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_division(self, division_id, request).await
    }
}
