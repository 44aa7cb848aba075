//! Typed path parameter extractors.
//!
//! Each extractor pulls one named i64 path segment, rejecting non-numeric
//! or non-positive values with a uniform 400 response before the handler
//! runs.

use crate::models::{ApiResponse, ErrorCode};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use std::future::{Ready, ready};

fn invalid_path_error(param: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameter: {param}"),
    ));
    actix_web::error::InternalError::from_response(format!("invalid {param}"), response).into()
}

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(invalid_path_error($param)),
                })
            }
        }
    };
}

define_safe_id_extractor!(SafeIDI64, "id");
define_safe_id_extractor!(SafePeriodIdI64, "period_id");
define_safe_id_extractor!(SafeDivisionIdI64, "division_id");
define_safe_id_extractor!(SafeProkerIdI64, "proker_id");
define_safe_id_extractor!(SafeIndicatorIdI64, "indicator_id");
define_safe_id_extractor!(SafeEventIdI64, "event_id");
define_safe_id_extractor!(SafeEvaluationIdI64, "evaluation_id");
