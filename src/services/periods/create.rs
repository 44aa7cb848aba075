use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PeriodService;
use crate::models::{
    ApiResponse, ErrorCode,
    periods::{requests::CreatePeriodRequest, responses::PeriodResponse},
};

pub async fn create_period(
    service: &PeriodService,
    period_data: CreatePeriodRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if period_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Period name must not be empty",
        )));
    }

    // Academic years must progress
    if period_data.end_year < period_data.start_year {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidPeriodYears,
            "end_year must not be before start_year",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_period(period_data).await {
        Ok(period) => Ok(HttpResponse::Created().json(ApiResponse::success(
            PeriodResponse { period },
            "Period created successfully",
        ))),
        Err(e) => {
            let msg = format!("Period creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyExists,
                    "A period with this name already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
