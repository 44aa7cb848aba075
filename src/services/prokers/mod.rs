pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod panitia;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::prokers::requests::{
    AddPanitiaRequest, CreateProkerRequest, ProkerListParams, UpdateProkerRequest,
};
use crate::storage::Storage;

pub struct ProkerService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProkerService {
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

    pub async fn list_prokers(
        &self,
        query: ProkerListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_prokers(self, query, request).await
    }

    pub async fn create_proker(
        &self,
        proker_data: CreateProkerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_proker(self, proker_data, request).await
    }

    pub async fn get_proker(
        &self,
        proker_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_proker(self, proker_id, request).await
    }

    pub async fn update_proker(
        &self,
        proker_id: i64,
        update_data: UpdateProkerRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_proker(self, proker_id, update_data, request).await
    }

    pub async fn delete_proker(
        &self,
        proker_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_proker(self, proker_id, request).await
    }

    // Committee roster management
    pub async fn list_panitia(
        &self,
        proker_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        panitia::list_panitia(self, proker_id, request).await
    }

    pub async fn add_panitia(
        &self,
        proker_id: i64,
        add_request: AddPanitiaRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        panitia::add_panitia(self, proker_id, add_request, request).await
    }

    pub async fn remove_panitia(
        &self,
        proker_id: i64,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        panitia::remove_panitia(self, proker_id, user_id, request).await
    }
}
