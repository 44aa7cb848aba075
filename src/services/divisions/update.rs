use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DivisionService;
use crate::models::{
    ApiResponse, ErrorCode,
    divisions::{requests::UpdateDivisionRequest, responses::DivisionResponse},
};

pub async fn update_division(
    service: &DivisionService,
    division_id: i64,
    update_data: UpdateDivisionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_data.name {
        if name.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Division name must not be empty",
            )));
        }
    }

    let storage = service.get_storage(request);

    match storage.update_division(division_id, update_data).await {
        Ok(Some(division)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DivisionResponse { division },
            "Division updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DivisionNotFound,
            "Division not found",
        ))),
        Err(e) => {
            error!("Division update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Division update failed: {e}"),
                )),
            )
        }
    }
}
