use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EventService;
use crate::models::audit::AuditAction;
use crate::models::events::entities::EventType;
use crate::models::{
    ApiResponse, ErrorCode,
    events::{requests::CreateEventRequest, responses::EventCreatedResponse},
};
use crate::utils::audit;

pub async fn create_event(
    service: &EventService,
    event_data: CreateEventRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if event_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Event name must not be empty",
        )));
    }

    if event_data.end_date < event_data.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "end_date must not be before start_date",
        )));
    }

    // The type decides whether a proker is required
    match event_data.event_type {
        EventType::Proker if event_data.proker_id.is_none() => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "proker_id is required for PROKER events",
            )));
        }
        EventType::Periodic if event_data.proker_id.is_some() => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "proker_id is not allowed for PERIODIC events",
            )));
        }
        _ => {}
    }

    if event_data.indicator_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidIndicator,
            "At least one indicator is required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_period_by_id(event_data.period_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PeriodNotFound,
                "Period not found",
            )));
        }
        Err(e) => return Ok(internal(e)),
    }

    if let Some(proker_id) = event_data.proker_id {
        match storage.get_proker_by_id(proker_id).await {
            Ok(Some(proker)) => {
                if proker.period_id != event_data.period_id {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::ProkerPeriodMismatch,
                        "Proker does not belong to the event's period",
                    )));
                }
            }
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ProkerNotFound,
                    "Proker not found",
                )));
            }
            Err(e) => return Ok(internal(e)),
        }
    }

    // Every indicator must exist and still be active
    let requested: HashSet<i64> = event_data.indicator_ids.iter().copied().collect();
    match storage.get_indicators_by_ids(&event_data.indicator_ids).await {
        Ok(indicators) => {
            let found: HashSet<i64> = indicators.iter().map(|i| i.id).collect();
            if found != requested {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidIndicator,
                    "One or more indicators do not exist",
                )));
            }
            if let Some(inactive) = indicators.iter().find(|i| !i.is_active) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidIndicator,
                    format!("Indicator '{}' is inactive", inactive.name),
                )));
            }
        }
        Err(e) => return Ok(internal(e)),
    }

    match storage.create_event_with_assignments(event_data).await {
        Ok((event, assignments_created)) => {
            info!(
                "Event {} created with {} assignments",
                event.id, assignments_created
            );
            audit::record(
                &storage,
                audit::entry_from_request(request, AuditAction::EventCreated, true)
                    .metadata(serde_json::json!({ "event_id": event.id })),
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                EventCreatedResponse {
                    event,
                    assignments_created,
                },
                "Event created successfully",
            )))
        }
        Err(e) => {
            error!("Event creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Event creation failed: {e}"),
                )),
            )
        }
    }
}

fn internal(e: crate::errors::PeerEvalError) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Event creation failed: {e}"),
    ))
}
