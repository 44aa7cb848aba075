use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EventService;
use crate::models::events::responses::EventDetailResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_event(
    service: &EventService,
    event_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let event = match storage.get_event_by_id(event_id).await {
        Ok(Some(event)) => event,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EventNotFound,
                "Event not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get event: {e}"),
                )),
            );
        }
    };

    let indicators = match storage.get_event_snapshots(event_id).await {
        Ok(snapshots) => snapshots,
        Err(e) => {
            error!("Failed to load event snapshots: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get event: {e}"),
                )),
            );
        }
    };

    let assignment_count = match storage.count_event_assignments(event_id).await {
        Ok(count) => count,
        Err(e) => {
            error!("Failed to count event assignments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get event: {e}"),
                )),
            );
        }
    };

    let period_name = match storage.get_period_by_id(event.period_id).await {
        Ok(period) => period.map(|p| p.name),
        Err(e) => {
            error!("Failed to load event period: {}", e);
            None
        }
    };
    let proker_name = match event.proker_id {
        Some(proker_id) => match storage.get_proker_by_id(proker_id).await {
            Ok(proker) => proker.map(|p| p.name),
            Err(e) => {
                error!("Failed to load event proker: {}", e);
                None
            }
        },
        None => None,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        EventDetailResponse {
            event,
            period_name,
            proker_name,
            indicators,
            assignment_count,
        },
        "Event retrieved successfully",
    )))
}
