use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::prokers::requests::{
    AddPanitiaRequest, CreateProkerRequest, ProkerListParams, UpdateProkerRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ProkerService;
use crate::utils::{SafeIDI64, SafeProkerIdI64};

static PROKER_SERVICE: Lazy<ProkerService> = Lazy::new(ProkerService::new_lazy);

pub async fn list_prokers(
    req: HttpRequest,
    query: web::Query<ProkerListParams>,
) -> ActixResult<HttpResponse> {
    PROKER_SERVICE.list_prokers(query.into_inner(), &req).await
}

pub async fn create_proker(
    req: HttpRequest,
    proker_data: web::Json<CreateProkerRequest>,
) -> ActixResult<HttpResponse> {
    PROKER_SERVICE
        .create_proker(proker_data.into_inner(), &req)
        .await
}

pub async fn get_proker(req: HttpRequest, proker_id: SafeProkerIdI64) -> ActixResult<HttpResponse> {
    PROKER_SERVICE.get_proker(proker_id.0, &req).await
}

pub async fn update_proker(
    req: HttpRequest,
    proker_id: SafeProkerIdI64,
    update_data: web::Json<UpdateProkerRequest>,
) -> ActixResult<HttpResponse> {
    PROKER_SERVICE
        .update_proker(proker_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_proker(
    req: HttpRequest,
    proker_id: SafeProkerIdI64,
) -> ActixResult<HttpResponse> {
    PROKER_SERVICE.delete_proker(proker_id.0, &req).await
}

pub async fn list_panitia(
    req: HttpRequest,
    proker_id: SafeProkerIdI64,
) -> ActixResult<HttpResponse> {
    PROKER_SERVICE.list_panitia(proker_id.0, &req).await
}

pub async fn add_panitia(
    req: HttpRequest,
    proker_id: SafeProkerIdI64,
    add_data: web::Json<AddPanitiaRequest>,
) -> ActixResult<HttpResponse> {
    PROKER_SERVICE
        .add_panitia(proker_id.0, add_data.into_inner(), &req)
        .await
}

pub async fn remove_panitia(
    req: HttpRequest,
    proker_id: SafeProkerIdI64,
    user_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    PROKER_SERVICE
        .remove_panitia(proker_id.0, user_id.0, &req)
        .await
}

pub fn configure_proker_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/prokers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_prokers))
                    .route(
                        web::post()
                            .to(create_proker)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    ),
            )
            .service(
                web::resource("/{proker_id}")
                    .route(web::get().to(get_proker))
                    .route(
                        web::put()
                            .to(update_proker)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_proker)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{proker_id}/panitia")
                    .route(web::get().to(list_panitia))
                    .route(
                        web::post()
                            .to(add_panitia)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    ),
            )
            .service(
                web::resource("/{proker_id}/panitia/{id}").route(
                    web::delete()
                        .to(remove_panitia)
                        .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                ),
            ),
    );
}
