use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EventService;
use crate::models::{
    ApiResponse, ErrorCode,
    events::{requests::UpdateEventRequest, responses::EventResponse},
};

pub async fn update_event(
    service: &EventService,
    event_id: i64,
    update_data: UpdateEventRequest,
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
                    format!("Event update failed: {e}"),
                )),
            );
        }
    };

    // Once scores exist only the open flag may change
    let touches_more_than_flag = update_data.name.is_some()
        || update_data.start_date.is_some()
        || update_data.end_date.is_some();
    if touches_more_than_flag {
        match storage.event_has_submissions(event_id).await {
            Ok(true) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::EventLocked,
                    "Event already has submissions; only is_open may be changed",
                )));
            }
            Ok(false) => {}
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Event update failed: {e}"),
                    )),
                );
            }
        }
    }

    let start = update_data.start_date.unwrap_or(event.start_date);
    let end = update_data.end_date.unwrap_or(event.end_date);
    if end < start {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "end_date must not be before start_date",
        )));
    }

    match storage.update_event(event_id, update_data).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EventResponse { event },
            "Event updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Event not found",
        ))),
        Err(e) => {
            error!("Event update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Event update failed: {e}"),
                )),
            )
        }
    }
}
