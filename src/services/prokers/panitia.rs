use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProkerService;
use crate::models::{
    ApiResponse, ErrorCode,
    prokers::{requests::AddPanitiaRequest, responses::PanitiaListResponse},
};

pub async fn list_panitia(
    service: &ProkerService,
    proker_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_proker_by_id(proker_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ProkerNotFound,
                "Proker not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve committee list: {e}"),
                )),
            );
        }
    }

    match storage.list_panitia(proker_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PanitiaListResponse { items },
            "Committee list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve committee list: {e}"),
            )),
        ),
    }
}

pub async fn add_panitia(
    service: &ProkerService,
    proker_id: i64,
    add_request: AddPanitiaRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let proker = match storage.get_proker_by_id(proker_id).await {
        Ok(Some(proker)) => proker,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ProkerNotFound,
                "Proker not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to add committee member: {e}"),
                )),
            );
        }
    };

    // Committee members come from the proker's own period
    match storage.get_user_by_id(add_request.user_id).await {
        Ok(Some(user)) => {
            if user.period_id != proker.period_id {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "User does not belong to the proker's period",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to add committee member: {e}"),
                )),
            );
        }
    }

    // Adding is idempotent; repeating it returns the existing membership
    match storage.add_panitia(proker_id, add_request.user_id).await {
        Ok(panitia) => Ok(HttpResponse::Created().json(ApiResponse::success(
            panitia,
            "Committee member added successfully",
        ))),
        Err(e) => {
            let msg = format!("Failed to add committee member: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}

pub async fn remove_panitia(
    service: &ProkerService,
    proker_id: i64,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.remove_panitia(proker_id, user_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Committee member removed successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PanitiaNotFound,
            "Committee member not found",
        ))),
        Err(e) => {
            error!("Failed to remove committee member: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to remove committee member: {e}"),
                )),
            )
        }
    }
}
