use sqlx::PgPool;

pub(crate) async fn find_name_by_id(
    pool: &PgPool,
    id: &str,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT name FROM programs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
