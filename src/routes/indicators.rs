use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::indicators::requests::{
    CreateIndicatorRequest, IndicatorListParams, UpdateIndicatorRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::IndicatorService;
use crate::utils::SafeIndicatorIdI64;

static INDICATOR_SERVICE: Lazy<IndicatorService> = Lazy::new(IndicatorService::new_lazy);

pub async fn list_indicators(
    req: HttpRequest,
    query: web::Query<IndicatorListParams>,
) -> ActixResult<HttpResponse> {
    INDICATOR_SERVICE
        .list_indicators(query.into_inner(), &req)
        .await
}

pub async fn create_indicator(
    req: HttpRequest,
    indicator_data: web::Json<CreateIndicatorRequest>,
) -> ActixResult<HttpResponse> {
    INDICATOR_SERVICE
        .create_indicator(indicator_data.into_inner(), &req)
        .await
}

pub async fn get_indicator(
    req: HttpRequest,
    indicator_id: SafeIndicatorIdI64,
) -> ActixResult<HttpResponse> {
    INDICATOR_SERVICE.get_indicator(indicator_id.0, &req).await
}

pub async fn update_indicator(
    req: HttpRequest,
    indicator_id: SafeIndicatorIdI64,
    update_data: web::Json<UpdateIndicatorRequest>,
) -> ActixResult<HttpResponse> {
    INDICATOR_SERVICE
        .update_indicator(indicator_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_indicator(
    req: HttpRequest,
    indicator_id: SafeIndicatorIdI64,
) -> ActixResult<HttpResponse> {
    INDICATOR_SERVICE
        .delete_indicator(indicator_id.0, &req)
        .await
}

pub fn configure_indicator_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/indicators")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_indicators))
                    .route(
                        web::post()
                            .to(create_indicator)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    ),
            )
            .service(
                web::resource("/{indicator_id}")
                    .route(web::get().to(get_indicator))
                    .route(
                        web::put()
                            .to(update_indicator)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_indicator)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    ),
            ),
    );
}
