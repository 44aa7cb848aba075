use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProkerService;
use crate::models::{
    ApiResponse, ErrorCode,
    prokers::{requests::UpdateProkerRequest, responses::ProkerResponse},
};

pub async fn update_proker(
    service: &ProkerService,
    proker_id: i64,
    update_data: UpdateProkerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name {
        if name.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Proker name must not be empty",
            )));
        }
    }

    let storage = service.get_storage(request);

    if let Some(division_id) = update_data.division_id {
        match storage.get_division_by_id(division_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::DivisionNotFound,
                    "Division not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Proker update failed: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_proker(proker_id, update_data).await {
        Ok(Some(proker)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProkerResponse { proker },
            "Proker updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProkerNotFound,
            "Proker not found",
        ))),
        Err(e) => {
            error!("Proker update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Proker update failed: {e}"),
                )),
            )
        }
    }
}
