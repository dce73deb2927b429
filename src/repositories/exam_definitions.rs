use sqlx::PgPool;

use crate::db::models::ExamDefinition;

const COLUMNS: &str = "id, instructions_link, created_at, updated_at";

pub(crate) async fn find_by_id(
    pool: &PgPool,
    id: &str,
) -> Result<Option<ExamDefinition>, sqlx::Error> {
    sqlx::query_as::<_, ExamDefinition>(&format!(
        "SELECT {COLUMNS} FROM exam_definitions WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}
