mod eligibility;
mod helpers;
mod session;

use axum::{routing::get, routing::post, Router};

use crate::core::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/validate-dni", post(eligibility::validate_dni))
        .route("/start", post(session::start_exam))
        .route("/status/:access_id", get(session::check_exam_status))
        .route("/submit", post(session::submit_exam))
        .route("/instructions/:exam_id", get(session::exam_instructions))
}

#[cfg(test)]
mod tests;
