use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::middlewares::require_jwt::RequireJWT;
use crate::models::evaluations::requests::EvaluationListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_my_evaluations(
    service: &EvaluationService,
    query: EvaluationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(evaluator_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user id",
        )));
    };

    let storage = service.get_storage(request);

    match storage.list_my_evaluations(evaluator_id, query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Evaluation list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve evaluation list: {e}"),
            )),
        ),
    }
}
