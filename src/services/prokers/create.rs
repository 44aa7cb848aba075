use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProkerService;
use crate::models::{
    ApiResponse, ErrorCode,
    prokers::{requests::CreateProkerRequest, responses::ProkerResponse},
};

pub async fn create_proker(
    service: &ProkerService,
    proker_data: CreateProkerRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if proker_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Proker name must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_period_by_id(proker_data.period_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PeriodNotFound,
                "Period not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Proker creation failed: {e}"),
                )),
            );
        }
    }

    match storage.get_division_by_id(proker_data.division_id).await {
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
                    format!("Proker creation failed: {e}"),
                )),
            );
        }
    }

    match storage.create_proker(proker_data).await {
        Ok(proker) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ProkerResponse { proker },
            "Proker created successfully",
        ))),
        Err(e) => {
            error!("Proker creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Proker creation failed: {e}"),
                )),
            )
        }
    }
}
