use crate::api::errors::ApiError;
pub(in crate::api::exam) use crate::core::time::primitive_now_utc as now_primitive;
use crate::db::models::AccessSession;
use crate::repositories;

pub(in crate::api::exam) async fn fetch_session(
    pool: &sqlx::PgPool,
    access_id: &str,
) -> Result<AccessSession, ApiError> {
    repositories::access_sessions::find_by_id(pool, access_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch access session"))?
        .ok_or_else(|| ApiError::NotFound("Access session not found".to_string()))
}
