use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateDniRequest {
    pub(crate) dni: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct StudentInfo {
    pub(crate) enrollment_id: String,
    pub(crate) national_id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) program: String,
    pub(crate) allowed_minutes: i32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidateDniResponse {
    pub(crate) status: String,
    pub(crate) student_info: StudentInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartExamRequest {
    pub(crate) enrollment_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct StartExamResponse {
    pub(crate) status: String,
    pub(crate) access_id: String,
    pub(crate) started_at: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExamStatusResponse {
    pub(crate) can_continue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) remaining_seconds: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct SubmitExamRequest {
    pub(crate) access_id: String,
    #[validate(length(min = 1, max = 512, message = "submission_link must be 1-512 characters"))]
    pub(crate) submission_link: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitExamResponse {
    pub(crate) status: String,
    pub(crate) submitted_at: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct InstructionsResponse {
    pub(crate) instructions_link: String,
}
