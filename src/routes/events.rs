use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::events::requests::{CreateEventRequest, EventListParams, UpdateEventRequest};
use crate::models::users::entities::UserRole;
use crate::services::EventService;
use crate::utils::SafeEventIdI64;

static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);

pub async fn list_events(
    req: HttpRequest,
    query: web::Query<EventListParams>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_events(query.into_inner(), &req).await
}

pub async fn create_event(
    req: HttpRequest,
    event_data: web::Json<CreateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .create_event(event_data.into_inner(), &req)
        .await
}

pub async fn get_event(req: HttpRequest, event_id: SafeEventIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.get_event(event_id.0, &req).await
}

pub async fn update_event(
    req: HttpRequest,
    event_id: SafeEventIdI64,
    update_data: web::Json<UpdateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .update_event(event_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_event(req: HttpRequest, event_id: SafeEventIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.delete_event(event_id.0, &req).await
}

pub fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/events")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_events))
                    .route(
                        web::post()
                            .to(create_event)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    ),
            )
            .service(
                web::resource("/{event_id}")
                    .route(web::get().to(get_event))
                    .route(
                        web::put()
                            .to(update_event)
                            .wrap(middlewares::RequireRole::new_any(UserRole::manage_roles())),
                    )
                    .route(
                        // Cascade deletion removes submitted scores
                        web::delete()
                            .to(delete_event)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
