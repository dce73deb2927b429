use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::db::types::RegularityStatus;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Student {
    pub(crate) id: String,
    pub(crate) national_id: String,
    pub(crate) full_name: String,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Enrollment {
    pub(crate) id: String,
    pub(crate) student_id: String,
    pub(crate) program_id: String,
    pub(crate) regularity_status: RegularityStatus,
    pub(crate) contact_email: String,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct ExamDefinition {
    pub(crate) id: String,
    pub(crate) instructions_link: String,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct ExamWindow {
    pub(crate) id: String,
    pub(crate) program_id: String,
    pub(crate) exam_id: String,
    pub(crate) regularity_status: RegularityStatus,
    pub(crate) window_start: PrimitiveDateTime,
    pub(crate) window_end: PrimitiveDateTime,
    pub(crate) allowed_minutes: i32,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

/// Single-use record of a student's exam attempt. `submitted_at` and
/// `submission_link` are set together, exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct AccessSession {
    pub(crate) id: String,
    pub(crate) enrollment_id: String,
    pub(crate) started_at: PrimitiveDateTime,
    pub(crate) submitted_at: Option<PrimitiveDateTime>,
    pub(crate) submission_link: Option<String>,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}
