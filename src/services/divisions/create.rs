use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DivisionService;
use crate::models::{
    ApiResponse, ErrorCode,
    divisions::{requests::CreateDivisionRequest, responses::DivisionResponse},
};

pub async fn create_division(
    service: &DivisionService,
    division_data: CreateDivisionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if division_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Division name must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_division(division_data).await {
        Ok(division) => Ok(HttpResponse::Created().json(ApiResponse::success(
            DivisionResponse { division },
            "Division created successfully",
        ))),
        Err(e) => {
            let msg = format!("Division creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyExists,
                    "A division with this name already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
