use axum::{extract::State, Json};

use crate::api::errors::ApiError;
use crate::api::exam::helpers::now_primitive;
use crate::api::validation;
use crate::core::state::AppState;
use crate::schemas::exam::{StudentInfo, ValidateDniRequest, ValidateDniResponse};
use crate::services::eligibility::{self, Eligibility};

pub(in crate::api::exam) async fn validate_dni(
    State(state): State<AppState>,
    Json(payload): Json<ValidateDniRequest>,
) -> Result<Json<ValidateDniResponse>, ApiError> {
    let dni = validation::validate_dni(&payload.dni)?;

    let outcome = eligibility::evaluate(state.db(), dni, now_primitive())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to evaluate exam eligibility"))?;

    match outcome {
        Eligibility::Eligible(eligible) => {
            tracing::info!(
                national_id = %dni,
                enrollment_id = %eligible.enrollment.id,
                program = %eligible.program_name,
                "Student eligible for final exam"
            );
            Ok(Json(ValidateDniResponse {
                status: "success".to_string(),
                student_info: StudentInfo {
                    enrollment_id: eligible.enrollment.id,
                    national_id: eligible.student.national_id,
                    name: eligible.student.full_name,
                    email: eligible.enrollment.contact_email,
                    program: eligible.program_name,
                    allowed_minutes: eligible.allowed_minutes,
                },
            }))
        }
        Eligibility::Ineligible(reason) => {
            tracing::warn!(national_id = %dni, reason = ?reason, "Student not eligible for final exam");
            Err(ApiError::BadRequest(reason.message().to_string()))
        }
    }
}
