use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::IndicatorService;
use crate::models::{
    ApiResponse, ErrorCode,
    indicators::{requests::CreateIndicatorRequest, responses::IndicatorResponse},
};

pub async fn create_indicator(
    service: &IndicatorService,
    indicator_data: CreateIndicatorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if indicator_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Indicator name must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_indicator(indicator_data).await {
        Ok(indicator) => Ok(HttpResponse::Created().json(ApiResponse::success(
            IndicatorResponse { indicator },
            "Indicator created successfully",
        ))),
        Err(e) => {
            error!("Indicator creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Indicator creation failed: {e}"),
                )),
            )
        }
    }
}
