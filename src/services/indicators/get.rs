use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::IndicatorService;
use crate::models::indicators::responses::IndicatorResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_indicator(
    service: &IndicatorService,
    indicator_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_indicator_by_id(indicator_id).await {
        Ok(Some(indicator)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            IndicatorResponse { indicator },
            "Indicator retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::IndicatorNotFound,
            "Indicator not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get indicator: {e}"),
            )),
        ),
    }
}
