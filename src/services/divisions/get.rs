use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DivisionService;
use crate::models::divisions::responses::DivisionResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_division(
    service: &DivisionService,
    division_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_division_by_id(division_id).await {
        Ok(Some(division)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DivisionResponse { division },
            "Division retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DivisionNotFound,
            "Division not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get division: {e}"),
            )),
        ),
    }
}
