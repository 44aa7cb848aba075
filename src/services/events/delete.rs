use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, warn};

use super::EventService;
use crate::middlewares::require_jwt::RequireJWT;
use crate::models::audit::AuditAction;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::audit;

/// Deletes the event together with its snapshots, assignments and scores.
pub async fn delete_event(
    service: &EventService,
    event_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_event_cascade(event_id).await {
        Ok(true) => {
            warn!("Event {} deleted with all its evaluation data", event_id);
            let mut entry =
                audit::entry_from_request(request, AuditAction::EventDeleted, true)
                    .metadata(serde_json::json!({ "event_id": event_id }));
            if let Some(user_id) = RequireJWT::extract_user_id(request) {
                entry = entry.user(user_id);
            }
            audit::record(&storage, entry);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Event deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Event not found",
        ))),
        Err(e) => {
            error!("Event deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Event deletion failed: {e}"),
                )),
            )
        }
    }
}
