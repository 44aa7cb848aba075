use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PeriodService;
use crate::models::{
    ApiResponse, ErrorCode,
    periods::{requests::UpdatePeriodRequest, responses::PeriodResponse},
};

pub async fn update_period(
    service: &PeriodService,
    period_id: i64,
    update_data: UpdatePeriodRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let (Some(start), Some(end)) = (update_data.start_year, update_data.end_year) {
        if end < start {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidPeriodYears,
                "end_year must not be before start_year",
            )));
        }
    }

    let storage = service.get_storage(request);

    // Activation deactivates every other period inside one transaction
    match storage.update_period(period_id, update_data).await {
        Ok(Some(period)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PeriodResponse { period },
            "Period updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PeriodNotFound,
            "Period not found",
        ))),
        Err(e) => {
            error!("Period update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Period update failed: {e}"),
                )),
            )
        }
    }
}
