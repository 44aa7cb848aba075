pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::{EvaluationListParams, SubmitEvaluationRequest};
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
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

    // Assignments of the authenticated evaluator
    pub async fn list_my_evaluations(
        &self,
        query: EvaluationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_my_evaluations(self, query, request).await
    }

    pub async fn submit_evaluation(
        &self,
        evaluation_id: i64,
        submit_request: SubmitEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_evaluation(self, evaluation_id, submit_request, request).await
    }
}
