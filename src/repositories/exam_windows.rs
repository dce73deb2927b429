use sqlx::PgPool;

use crate::db::models::ExamWindow;
use crate::db::types::RegularityStatus;

const COLUMNS: &str = "\
    id, program_id, exam_id, regularity_status, window_start, window_end, \
    allowed_minutes, created_at, updated_at";

/// Earliest window wins when several match the same program and status.
pub(crate) async fn find_for_program(
    pool: &PgPool,
    program_id: &str,
    regularity_status: RegularityStatus,
) -> Result<Option<ExamWindow>, sqlx::Error> {
    sqlx::query_as::<_, ExamWindow>(&format!(
        "SELECT {COLUMNS} FROM exam_windows \
         WHERE program_id = $1 AND regularity_status = $2 \
         ORDER BY window_start LIMIT 1"
    ))
    .bind(program_id)
    .bind(regularity_status)
    .fetch_optional(pool)
    .await
}

const JOINED_COLUMNS: &str = "\
    w.id, w.program_id, w.exam_id, w.regularity_status, w.window_start, w.window_end, \
    w.allowed_minutes, w.created_at, w.updated_at";

pub(crate) async fn find_for_enrollment(
    pool: &PgPool,
    enrollment_id: &str,
) -> Result<Option<ExamWindow>, sqlx::Error> {
    sqlx::query_as::<_, ExamWindow>(&format!(
        "SELECT {JOINED_COLUMNS} FROM exam_windows w \
         JOIN enrollments e \
           ON e.program_id = w.program_id AND e.regularity_status = w.regularity_status \
         WHERE e.id = $1 \
         ORDER BY w.window_start LIMIT 1"
    ))
    .bind(enrollment_id)
    .fetch_optional(pool)
    .await
}

