use sqlx::PgPool;

use crate::db::models::AccessSession;

pub(crate) const COLUMNS: &str = "\
    id, enrollment_id, started_at, submitted_at, submission_link, created_at, updated_at";

pub(crate) async fn find_by_id(
    pool: &PgPool,
    id: &str,
) -> Result<Option<AccessSession>, sqlx::Error> {
    sqlx::query_as::<_, AccessSession>(&format!(
        "SELECT {COLUMNS} FROM access_sessions WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn find_by_enrollment(
    pool: &PgPool,
    enrollment_id: &str,
) -> Result<Option<AccessSession>, sqlx::Error> {
    sqlx::query_as::<_, AccessSession>(&format!(
        "SELECT {COLUMNS} FROM access_sessions WHERE enrollment_id = $1"
    ))
    .bind(enrollment_id)
    .fetch_optional(pool)
    .await
}

pub(crate) struct CreateAccessSession<'a> {
    pub(crate) id: &'a str,
    pub(crate) enrollment_id: &'a str,
    pub(crate) started_at: time::PrimitiveDateTime,
    pub(crate) created_at: time::PrimitiveDateTime,
    pub(crate) updated_at: time::PrimitiveDateTime,
}

/// Insert the single session allowed per enrollment. Relies on the UNIQUE
/// constraint on enrollment_id; returns false when a session already exists.
pub(crate) async fn create(
    pool: &PgPool,
    session: CreateAccessSession<'_>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO access_sessions (
            id, enrollment_id, started_at, created_at, updated_at
        ) VALUES ($1,$2,$3,$4,$5)
        ON CONFLICT (enrollment_id) DO NOTHING",
    )
    .bind(session.id)
    .bind(session.enrollment_id)
    .bind(session.started_at)
    .bind(session.created_at)
    .bind(session.updated_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// One-way transition to submitted. The guard on submitted_at keeps a second
/// submit from overwriting the first; returns false when the row was already
/// submitted or absent.
pub(crate) async fn finalize(
    pool: &PgPool,
    id: &str,
    submission_link: &str,
    now: time::PrimitiveDateTime,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE access_sessions \
         SET submitted_at = $1, submission_link = $2, updated_at = $1 \
         WHERE id = $3 AND submitted_at IS NULL",
    )
    .bind(now)
    .bind(submission_link)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
