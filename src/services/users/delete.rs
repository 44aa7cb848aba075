use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::middlewares::require_jwt::RequireJWT;
use crate::models::audit::AuditAction;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::audit;

pub async fn delete_user(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // The authenticated account cannot delete itself
    if RequireJWT::extract_user_id(request) == Some(user_id) {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CanNotDeleteCurrentUser,
            "You cannot delete your own account",
        )));
    }

    let storage = service.get_storage(request);

    match storage.delete_user(user_id).await {
        Ok(true) => {
            audit::record(
                &storage,
                audit::entry_from_request(request, AuditAction::UserDeleted, true).user(user_id),
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            let msg = format!("User deletion failed: {e}");
            error!("{}", msg);
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StillReferenced,
                    "User still has evaluations or committee memberships attached",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
