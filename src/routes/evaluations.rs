use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluations::requests::{EvaluationListParams, SubmitEvaluationRequest};
use crate::services::EvaluationService;
use crate::utils::SafeEvaluationIdI64;

static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn list_my_evaluations(
    req: HttpRequest,
    query: web::Query<EvaluationListParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_my_evaluations(query.into_inner(), &req)
        .await
}

pub async fn submit_evaluation(
    req: HttpRequest,
    evaluation_id: SafeEvaluationIdI64,
    submit_data: web::Json<SubmitEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .submit_evaluation(evaluation_id.0, submit_data.into_inner(), &req)
        .await
}

pub fn configure_evaluation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluations")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_my_evaluations))
            .route(
                "/{evaluation_id}/submit",
                web::post().to(submit_evaluation),
            ),
    );
}
