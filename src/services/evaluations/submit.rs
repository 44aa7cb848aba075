use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EvaluationService;
use crate::middlewares::require_jwt::RequireJWT;
use crate::models::audit::AuditAction;
use crate::models::{
    ApiResponse, ErrorCode,
    evaluations::{requests::SubmitEvaluationRequest, responses::SubmitEvaluationResponse},
};
use crate::utils::audit;
use crate::utils::validate::validate_score;

/// Validation runs in a fixed order: existence with ownership, submission
/// window, duplicate submission, score set.
pub async fn submit_evaluation(
    service: &EvaluationService,
    evaluation_id: i64,
    submit_request: SubmitEvaluationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(evaluator_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user id",
        )));
    };

    let storage = service.get_storage(request);

    // 1. The assignment must exist and belong to the requester. A mismatched
    //    evaluator gets the same answer as a missing evaluation, so existence
    //    is never confirmed to someone else's assignment.
    let evaluation = match storage.get_evaluation_by_id(evaluation_id).await {
        Ok(Some(evaluation)) if evaluation.evaluator_id == evaluator_id => evaluation,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EvaluationNotFound,
                "Evaluation not found",
            )));
        }
        Err(e) => return Ok(internal(e)),
    };

    // 2. The event must be open and inside its submission window
    let event = match storage.get_event_by_id(evaluation.event_id).await {
        Ok(Some(event)) => event,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EventNotFound,
                "Event not found",
            )));
        }
        Err(e) => return Ok(internal(e)),
    };
    if !event.accepts_submissions(chrono::Utc::now()) {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::EventNotOpen,
            "Event is not accepting submissions",
        )));
    }

    // 3. Resubmission is rejected
    match storage.count_scores_for_evaluation(evaluation_id).await {
        Ok(0) => {}
        Ok(_) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadySubmitted,
                "Evaluation has already been submitted",
            )));
        }
        Err(e) => return Ok(internal(e)),
    }

    // 4. Exactly one score per snapshot of the event
    let snapshots = match storage.get_event_snapshots(evaluation.event_id).await {
        Ok(snapshots) => snapshots,
        Err(e) => return Ok(internal(e)),
    };
    let expected: Vec<i64> = snapshots.iter().map(|s| s.id).collect();
    let provided: Vec<i64> = submit_request
        .scores
        .iter()
        .map(|s| s.indicator_snapshot_id)
        .collect();
    if !scores_cover_snapshots(&provided, &expected) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidIndicator,
            "Scores must cover each event indicator exactly once",
        )));
    }

    // 5. All scores on the 1-5 scale
    for entry in &submit_request.scores {
        if let Err(msg) = validate_score(entry.score) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::InvalidScore, msg)));
        }
    }

    match storage
        .record_evaluation_scores(
            evaluation_id,
            &submit_request.scores,
            submit_request.feedback,
        )
        .await
    {
        Ok(scores_recorded) => {
            info!(
                "Evaluation {} submitted by user {}",
                evaluation_id, evaluator_id
            );
            audit::record(
                &storage,
                audit::entry_from_request(request, AuditAction::EvaluationSubmitted, true)
                    .user(evaluator_id)
                    .metadata(serde_json::json!({ "evaluation_id": evaluation_id })),
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SubmitEvaluationResponse {
                    evaluation_id,
                    scores_recorded,
                },
                "Evaluation submitted successfully",
            )))
        }
        // A concurrent submit that won the race surfaces as a state conflict
        Err(e) if matches!(e, crate::errors::PeerEvalError::StateConflict(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadySubmitted,
                "Evaluation has already been submitted",
            )))
        }
        Err(e) => {
            error!("Evaluation submission failed: {}", e);
            Ok(internal(e))
        }
    }
}

fn internal(e: crate::errors::PeerEvalError) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Evaluation submission failed: {e}"),
    ))
}

/// True when the submitted snapshot ids match the event's snapshot set
/// exactly: no missing ids, no foreign ids, no duplicates.
fn scores_cover_snapshots(provided: &[i64], expected: &[i64]) -> bool {
    let provided_set: HashSet<i64> = provided.iter().copied().collect();
    let expected_set: HashSet<i64> = expected.iter().copied().collect();
    provided_set.len() == provided.len() && provided_set == expected_set
}

#[cfg(test)]
mod tests {
    use super::scores_cover_snapshots;

    #[test]
    fn test_exact_cover_is_accepted() {
        assert!(scores_cover_snapshots(&[3, 1, 2], &[1, 2, 3]));
    }

    #[test]
    fn test_missing_snapshot_is_rejected() {
        assert!(!scores_cover_snapshots(&[1, 2], &[1, 2, 3]));
    }

    #[test]
    fn test_foreign_snapshot_is_rejected() {
        assert!(!scores_cover_snapshots(&[1, 2, 99], &[1, 2, 3]));
    }

    #[test]
    fn test_duplicated_snapshot_is_rejected() {
        // Covers the set but scores one snapshot twice
        assert!(!scores_cover_snapshots(&[1, 2, 3, 3], &[1, 2, 3]));
        assert!(!scores_cover_snapshots(&[1, 2, 2], &[1, 2, 3]));
    }

    #[test]
    fn test_empty_event_with_empty_submission() {
        assert!(scores_cover_snapshots(&[], &[]));
        assert!(!scores_cover_snapshots(&[], &[1]));
    }
}
