use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProkerService;
use crate::models::prokers::responses::ProkerResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_proker(
    service: &ProkerService,
    proker_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_proker_by_id(proker_id).await {
        Ok(Some(proker)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProkerResponse { proker },
            "Proker retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProkerNotFound,
            "Proker not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get proker: {e}"),
            )),
        ),
    }
}
