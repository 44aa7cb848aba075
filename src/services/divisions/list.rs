use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DivisionService;
use crate::models::divisions::requests::DivisionListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_divisions(
    service: &DivisionService,
    query: DivisionListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_divisions_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Division list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve division list: {e}"),
            )),
        ),
    }
}
