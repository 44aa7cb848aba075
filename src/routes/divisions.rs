use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::divisions::requests::{
    CreateDivisionRequest, DivisionListParams, UpdateDivisionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::DivisionService;
use crate::utils::SafeDivisionIdI64;

static DIVISION_SERVICE: Lazy<DivisionService> = Lazy::new(DivisionService::new_lazy);

pub async fn list_divisions(
    req: HttpRequest,
    query: web::Query<DivisionListParams>,
) -> ActixResult<HttpResponse> {
    DIVISION_SERVICE
        .list_divisions(query.into_inner(), &req)
        .await
}

pub async fn create_division(
    req: HttpRequest,
    division_data: web::Json<CreateDivisionRequest>,
) -> ActixResult<HttpResponse> {
    DIVISION_SERVICE
        .create_division(division_data.into_inner(), &req)
        .await
}

pub async fn get_division(
    req: HttpRequest,
    division_id: SafeDivisionIdI64,
) -> ActixResult<HttpResponse> {
    DIVISION_SERVICE.get_division(division_id.0, &req).await
}

pub async fn update_division(
    req: HttpRequest,
    division_id: SafeDivisionIdI64,
    update_data: web::Json<UpdateDivisionRequest>,
) -> ActixResult<HttpResponse> {
    DIVISION_SERVICE
        .update_division(division_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_division(
    req: HttpRequest,
    division_id: SafeDivisionIdI64,
) -> ActixResult<HttpResponse> {
    DIVISION_SERVICE.delete_division(division_id.0, &req).await
}

pub fn configure_division_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/divisions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_divisions))
                    .route(
                        web::post()
                            .to(create_division)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    ),
            )
            .service(
                web::resource("/{division_id}")
                    .route(web::get().to(get_division))
                    .route(
                        web::put()
                            .to(update_division)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_division)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
