use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::exam::helpers::{self, now_primitive};
use crate::api::validation;
use crate::core::state::AppState;
use crate::core::time::format_primitive;
use crate::repositories;
use crate::schemas::exam::{
    ExamStatusResponse, InstructionsResponse, StartExamRequest, StartExamResponse,
    SubmitExamRequest, SubmitExamResponse,
};
use crate::services::exam_timing;

pub(in crate::api::exam) async fn start_exam(
    State(state): State<AppState>,
    Json(payload): Json<StartExamRequest>,
) -> Result<Json<StartExamResponse>, ApiError> {
    let enrollment = repositories::enrollments::find_by_id(state.db(), &payload.enrollment_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch enrollment"))?
        .ok_or_else(|| ApiError::NotFound("Enrollment not found".to_string()))?;

    let now = now_primitive();
    let session_id = Uuid::new_v4().to_string();
    let inserted = repositories::access_sessions::create(
        state.db(),
        repositories::access_sessions::CreateAccessSession {
            id: &session_id,
            enrollment_id: &enrollment.id,
            started_at: now,
            created_at: now,
            updated_at: now,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create access session"))?;

    let session = if inserted {
        tracing::info!(
            enrollment_id = %enrollment.id,
            access_id = %session_id,
            "Access session created"
        );
        repositories::access_sessions::find_by_id(state.db(), &session_id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to fetch access session"))?
            .ok_or_else(|| ApiError::Internal("Access session missing after insert".to_string()))?
    } else {
        // Retried or duplicate start: hand back the original session instead
        // of minting a second attempt.
        let existing =
            repositories::access_sessions::find_by_enrollment(state.db(), &enrollment.id)
                .await
                .map_err(|e| ApiError::internal(e, "Failed to fetch access session"))?
                .ok_or_else(|| {
                    ApiError::Internal("Access session missing after conflict".to_string())
                })?;
        tracing::warn!(
            enrollment_id = %enrollment.id,
            access_id = %existing.id,
            "Access session already exists; returning the existing one"
        );
        existing
    };

    Ok(Json(StartExamResponse {
        status: "success".to_string(),
        access_id: session.id,
        started_at: format_primitive(session.started_at),
    }))
}

pub(in crate::api::exam) async fn check_exam_status(
    Path(access_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ExamStatusResponse>, ApiError> {
    let session = helpers::fetch_session(state.db(), &access_id).await?;

    if session.submitted_at.is_some() {
        return Ok(Json(ExamStatusResponse {
            can_continue: false,
            message: Some("Exam has already been submitted".to_string()),
            remaining_seconds: None,
        }));
    }

    let window = repositories::exam_windows::find_for_enrollment(state.db(), &session.enrollment_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch exam window"))?
        .ok_or_else(|| {
            ApiError::NotFound("No exam window assigned for this enrollment".to_string())
        })?;

    let now = now_primitive();
    if exam_timing::time_exceeded(session.started_at, window.allowed_minutes, now) {
        return Ok(Json(ExamStatusResponse {
            can_continue: false,
            message: Some("Exam time has been exceeded".to_string()),
            remaining_seconds: Some(0),
        }));
    }

    Ok(Json(ExamStatusResponse {
        can_continue: true,
        message: None,
        remaining_seconds: Some(exam_timing::remaining_seconds(
            session.started_at,
            window.allowed_minutes,
            now,
        )),
    }))
}

pub(in crate::api::exam) async fn submit_exam(
    State(state): State<AppState>,
    Json(payload): Json<SubmitExamRequest>,
) -> Result<Json<SubmitExamResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    validation::validate_submission_link(&payload.submission_link)?;

    let session = helpers::fetch_session(state.db(), &payload.access_id).await?;
    if session.submitted_at.is_some() {
        return Err(ApiError::Conflict("Exam has already been submitted".to_string()));
    }

    let now = now_primitive();
    let submission_link = payload.submission_link.trim();
    let finalized =
        repositories::access_sessions::finalize(state.db(), &session.id, submission_link, now)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to record submission"))?;

    if !finalized {
        return Err(ApiError::Conflict("Exam has already been submitted".to_string()));
    }

    tracing::info!(access_id = %session.id, "Exam submission recorded");

    notify_submission(&state, &session.enrollment_id, &session.id, now, submission_link).await;

    Ok(Json(SubmitExamResponse {
        status: "success".to_string(),
        submitted_at: format_primitive(now),
    }))
}

/// Confirmation email is best-effort: every failure path lands in the log and
/// the submission stays successful.
async fn notify_submission(
    state: &AppState,
    enrollment_id: &str,
    access_id: &str,
    submitted_at: time::PrimitiveDateTime,
    submission_link: &str,
) {
    let recipient =
        match repositories::enrollments::find_contact_email(state.db(), enrollment_id).await {
            Ok(Some(email)) => email,
            Ok(None) => {
                tracing::error!(access_id = %access_id, "No contact email found for enrollment");
                return;
            }
            Err(err) => {
                tracing::error!(error = %err, access_id = %access_id, "Failed to look up contact email");
                return;
            }
        };

    let Some(mailer) = state.mailer() else {
        tracing::warn!(access_id = %access_id, "Mail service not configured; skipping confirmation");
        return;
    };

    if let Err(err) = mailer
        .send_submission_confirmation(&recipient, submitted_at, submission_link)
        .await
    {
        tracing::error!(error = %err, access_id = %access_id, "Failed to send submission confirmation");
    } else {
        tracing::info!(access_id = %access_id, "Submission confirmation sent");
    }
}

pub(in crate::api::exam) async fn exam_instructions(
    Path(exam_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InstructionsResponse>, ApiError> {
    let exam = repositories::exam_definitions::find_by_id(state.db(), &exam_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch exam definition"))?
        .ok_or_else(|| ApiError::NotFound("Exam not found".to_string()))?;

    Ok(Json(InstructionsResponse { instructions_link: exam.instructions_link }))
}
