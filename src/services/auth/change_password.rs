use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::audit::AuditAction;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode, auth::requests::ChangePasswordRequest};
use crate::utils::audit;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::validate_password;

use super::AuthService;

pub async fn handle_change_password(
    service: &AuthService,
    change_request: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    // The current password must still match
    if !verify_password(&change_request.current_password, &user.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Current password is incorrect",
        )));
    }

    let validation = validate_password(&change_request.new_password);
    if !validation.is_valid {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            validation.error_message(),
        )));
    }

    let password_hash = match hash_password(&change_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Password change failed",
                )),
            );
        }
    };

    let storage = service.get_storage(request);
    let update = UpdateUserRequest {
        password: Some(password_hash),
        ..Default::default()
    };

    match storage.update_user(user.id, update).await {
        Ok(Some(_)) => {
            audit::record(
                &storage,
                audit::entry_from_request(request, AuditAction::PasswordChanged, true)
                    .user(user.id),
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::<()>::success_empty("Password changed successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            error!("Password change failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password change failed: {e}"),
                )),
            )
        }
    }
}
