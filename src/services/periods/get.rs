use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PeriodService;
use crate::models::periods::responses::PeriodResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_period(
    service: &PeriodService,
    period_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_period_by_id(period_id).await {
        Ok(Some(period)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PeriodResponse { period },
            "Period retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PeriodNotFound,
            "Period not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get period: {e}"),
            )),
        ),
    }
}
