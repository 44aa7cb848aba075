use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProkerService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_proker(
    service: &ProkerService,
    proker_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_proker(proker_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Proker deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProkerNotFound,
            "Proker not found",
        ))),
        Err(e) => {
            let msg = format!("Proker deletion failed: {e}");
            error!("{}", msg);
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StillReferenced,
                    "Proker still has events attached",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
