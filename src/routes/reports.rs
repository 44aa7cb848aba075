use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::requests::{ExportParams, ReportParams};
use crate::models::users::entities::UserRole;
use crate::services::ReportService;
use crate::utils::SafeEventIdI64;

static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn get_event_report(
    req: HttpRequest,
    event_id: SafeEventIdI64,
    params: web::Query<ReportParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .get_event_report(event_id.0, params.into_inner(), &req)
        .await
}

pub async fn export_event_report(
    req: HttpRequest,
    event_id: SafeEventIdI64,
    params: web::Query<ExportParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .export_event_report(event_id.0, params.into_inner(), &req)
        .await
}

pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/results")
            .wrap(middlewares::RequireRole::new_any(UserRole::report_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{event_id}", web::get().to(get_event_report))
            .route(
                "/{event_id}/export",
                web::get()
                    .to(export_event_report)
                    .wrap(middlewares::RateLimit::export()),
            ),
    );
}
