use sqlx::PgPool;

use crate::db::models::Student;

const COLUMNS: &str = "id, national_id, full_name, created_at, updated_at";

pub(crate) async fn find_by_national_id(
    pool: &PgPool,
    national_id: &str,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(&format!(
        "SELECT {COLUMNS} FROM students WHERE national_id = $1"
    ))
    .bind(national_id)
    .fetch_optional(pool)
    .await
}
