use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DivisionService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_division(
    service: &DivisionService,
    division_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_division(division_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Division deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DivisionNotFound,
            "Division not found",
        ))),
        Err(e) => {
            let msg = format!("Division deletion failed: {e}");
            error!("{}", msg);
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StillReferenced,
                    "Division still has users or prokers attached",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
