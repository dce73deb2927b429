use sqlx::PgPool;

use crate::db::models::Enrollment;

const COLUMNS: &str = "\
    id, student_id, program_id, regularity_status, contact_email, created_at, updated_at";

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Enrollment>, sqlx::Error> {
    sqlx::query_as::<_, Enrollment>(&format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn find_by_student(
    pool: &PgPool,
    student_id: &str,
) -> Result<Option<Enrollment>, sqlx::Error> {
    sqlx::query_as::<_, Enrollment>(&format!(
        "SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 ORDER BY created_at LIMIT 1"
    ))
    .bind(student_id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn find_contact_email(
    pool: &PgPool,
    id: &str,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT contact_email FROM enrollments WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
