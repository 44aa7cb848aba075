use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::audit::AuditAction;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::utils::audit;
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. Look the user up by NIM
    match storage.get_user_by_nim(&login_request.nim).await {
        Ok(Some(user)) => {
            // 2. Inactive accounts cannot authenticate
            if !user.is_active {
                audit::record(
                    &storage,
                    audit::entry_from_request(request, AuditAction::LoginFailed, false)
                        .user(user.id),
                );
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "NIM or password is incorrect",
                )));
            }

            // 3. Verify the password
            if verify_password(&login_request.password, &user.password_hash) {
                let _ = storage.update_last_login(user.id).await;

                // 4. Token pair, refresh lifetime extended when remember_me is set
                match user
                    .generate_token_pair(login_request.remember_me.then(|| {
                        chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
                    }))
                    .await
                {
                    Ok(token_pair) => {
                        tracing::info!("User {} logged in", user.nim);
                        audit::record(
                            &storage,
                            audit::entry_from_request(request, AuditAction::Login, true)
                                .user(user.id),
                        );

                        let response = LoginResponse {
                            access_token: token_pair.access_token,
                            expires_in: config.jwt.access_token_expiry * 60, // minutes to seconds
                            user,
                            created_at: chrono::Utc::now(),
                        };

                        let refresh_cookie =
                            jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                        Ok(HttpResponse::Ok()
                            .cookie(refresh_cookie)
                            .json(ApiResponse::success(response, "Login successful")))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to generate token",
                            )),
                        )
                    }
                }
            } else {
                audit::record(
                    &storage,
                    audit::entry_from_request(request, AuditAction::LoginFailed, false)
                        .user(user.id),
                );
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "NIM or password is incorrect",
                )))
            }
        }
        // Same message as a bad password, unknown NIMs are not revealed
        Ok(None) => {
            audit::record(
                &storage,
                audit::entry_from_request(request, AuditAction::LoginFailed, false),
            );
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "NIM or password is incorrect",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
