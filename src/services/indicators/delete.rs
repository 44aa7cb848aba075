use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::IndicatorService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_indicator(
    service: &IndicatorService,
    indicator_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // Indicators referenced by an event snapshot can only be deactivated
    match storage.indicator_in_use(indicator_id).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::IndicatorInUse,
                "Indicator is used by an event and cannot be deleted; deactivate it instead",
            )));
        }
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Indicator deletion failed: {e}"),
                )),
            );
        }
    }

    match storage.delete_indicator(indicator_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Indicator deleted successfully"))
        ),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::IndicatorNotFound,
            "Indicator not found",
        ))),
        Err(e) => {
            error!("Indicator deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Indicator deletion failed: {e}"),
                )),
            )
        }
    }
}
