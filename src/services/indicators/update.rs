use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::IndicatorService;
use crate::models::{
    ApiResponse, ErrorCode,
    indicators::{requests::UpdateIndicatorRequest, responses::IndicatorResponse},
};

pub async fn update_indicator(
    service: &IndicatorService,
    indicator_id: i64,
    update_data: UpdateIndicatorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name {
        if name.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Indicator name must not be empty",
            )));
        }
    }

    let storage = service.get_storage(request);

    // Snapshots keep their frozen copy, so edits never rewrite past events
    match storage.update_indicator(indicator_id, update_data).await {
        Ok(Some(indicator)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            IndicatorResponse { indicator },
            "Indicator updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::IndicatorNotFound,
            "Indicator not found",
        ))),
        Err(e) => {
            error!("Indicator update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Indicator update failed: {e}"),
                )),
            )
        }
    }
}
