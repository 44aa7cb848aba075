use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProkerService;
use crate::models::prokers::requests::ProkerListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_prokers(
    service: &ProkerService,
    query: ProkerListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_prokers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Proker list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve proker list: {e}"),
            )),
        ),
    }
}
