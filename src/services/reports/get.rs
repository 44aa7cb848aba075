use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use super::ReportService;
use crate::middlewares::require_jwt::RequireJWT;
use crate::models::reports::requests::ReportParams;
use crate::models::reports::responses::EventReportResponse;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn get_event_report(
    service: &ReportService,
    event_id: i64,
    params: ReportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

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
                    format!("Failed to build report: {e}"),
                )),
            );
        }
    };

    let division_id = match resolve_division_scope(&user, params.division_id, &storage).await {
        Ok(division_id) => division_id,
        Err(response) => return Ok(response),
    };

    let total_assignments = match storage.count_event_assignments(event_id).await {
        Ok(count) => count,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to build report: {e}"),
                )),
            );
        }
    };

    match storage.fetch_report_source(event_id, division_id).await {
        Ok(source) => {
            let reports = super::aggregate::aggregate_reports(&source);
            let stats = super::aggregate::event_stats(&source, total_assignments);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                EventReportResponse {
                    event_id: event.id,
                    event_name: event.name,
                    event_type: event.event_type,
                    period_id: event.period_id,
                    proker_id: event.proker_id,
                    start_date: event.start_date,
                    end_date: event.end_date,
                    indicators: source.snapshots.clone(),
                    stats,
                    reports,
                },
                "Report retrieved successfully",
            )))
        }
        Err(e) => {
            error!("Failed to build report: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to build report: {e}"),
                )),
            )
        }
    }
}

/// Admins and BPI see every division. A kadiv of an oversight division does
/// too; any other kadiv is pinned to their own division.
pub(super) async fn resolve_division_scope(
    user: &User,
    requested: Option<i64>,
    storage: &Arc<dyn Storage>,
) -> Result<Option<i64>, HttpResponse> {
    match user.role {
        UserRole::Admin | UserRole::Bpi => Ok(requested),
        UserRole::Kadiv => {
            let Some(own_division_id) = user.division_id else {
                return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Kadiv account has no division",
                )));
            };
            let oversight = match storage.get_division_by_id(own_division_id).await {
                Ok(Some(division)) => division.is_oversight,
                Ok(None) => false,
                Err(e) => {
                    return Err(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to build report: {e}"),
                        ),
                    ));
                }
            };
            if oversight {
                return Ok(requested);
            }
            match requested {
                Some(division_id) if division_id != own_division_id => {
                    Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::Forbidden,
                        "Reports are limited to your own division",
                    )))
                }
                _ => Ok(Some(own_division_id)),
            }
        }
        UserRole::Anggota => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You do not have permission to view reports",
        ))),
    }
}
