use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::periods::requests::{
    CreatePeriodRequest, PeriodListParams, UpdatePeriodRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::PeriodService;
use crate::utils::SafePeriodIdI64;

static PERIOD_SERVICE: Lazy<PeriodService> = Lazy::new(PeriodService::new_lazy);

pub async fn list_periods(
    req: HttpRequest,
    query: web::Query<PeriodListParams>,
) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE.list_periods(query.into_inner(), &req).await
}

pub async fn create_period(
    req: HttpRequest,
    period_data: web::Json<CreatePeriodRequest>,
) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE
        .create_period(period_data.into_inner(), &req)
        .await
}

pub async fn get_period(
    req: HttpRequest,
    period_id: SafePeriodIdI64,
) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE.get_period(period_id.0, &req).await
}

pub async fn update_period(
    req: HttpRequest,
    period_id: SafePeriodIdI64,
    update_data: web::Json<UpdatePeriodRequest>,
) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE
        .update_period(period_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_period(
    req: HttpRequest,
    period_id: SafePeriodIdI64,
) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE.delete_period(period_id.0, &req).await
}

pub fn configure_period_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/periods")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_periods))
                    .route(
                        web::post()
                            .to(create_period)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    ),
            )
            .service(
                web::resource("/{period_id}")
                    .route(web::get().to(get_period))
                    .route(
                        web::put()
                            .to(update_period)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_period)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
