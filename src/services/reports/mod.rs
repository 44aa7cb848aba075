pub mod aggregate;
pub mod export;
pub mod get;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::requests::{ExportParams, ReportParams};
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    pub async fn get_event_report(
        &self,
        event_id: i64,
        params: ReportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_event_report(self, event_id, params, request).await
    }

    pub async fn export_event_report(
        &self,
        event_id: i64,
        params: ExportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_event_report(self, event_id, params, request).await
    }
}
