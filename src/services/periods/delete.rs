use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PeriodService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_period(
    service: &PeriodService,
    period_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_period(period_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Period deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PeriodNotFound,
            "Period not found",
        ))),
        Err(e) => {
            let msg = format!("Period deletion failed: {e}");
            error!("{}", msg);
            // Users, prokers and events reference periods
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StillReferenced,
                    "Period still has users, prokers or events attached",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
