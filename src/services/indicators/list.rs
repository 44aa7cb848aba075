use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::IndicatorService;
use crate::models::indicators::requests::IndicatorListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_indicators(
    service: &IndicatorService,
    query: IndicatorListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_indicators_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Indicator list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve indicator list: {e}"),
            )),
        ),
    }
}
