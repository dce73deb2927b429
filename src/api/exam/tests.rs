use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::test_support;

#[tokio::test]
async fn validate_dni_rejects_non_numeric_input() {
    let _guard = test_support::env_lock();
    test_support::set_test_env();
    let (_state, app) = test_support::build_app();

    let response = app
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/v1/exam/validate-dni",
            Some(json!({"dni": "12a45678"})),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = test_support::read_json(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("digits"));
}

#[tokio::test]
async fn validate_dni_rejects_wrong_length() {
    let _guard = test_support::env_lock();
    test_support::set_test_env();
    let (_state, app) = test_support::build_app();

    for dni in ["123456", "123456789", ""] {
        let response = app
            .clone()
            .oneshot(test_support::json_request(
                Method::POST,
                "/api/v1/exam/validate-dni",
                Some(json!({"dni": dni})),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "dni: {dni:?}");
    }
}

#[tokio::test]
async fn submit_rejects_non_repository_link() {
    let _guard = test_support::env_lock();
    test_support::set_test_env();
    let (_state, app) = test_support::build_app();

    let response = app
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/v1/exam/submit",
            Some(json!({
                "access_id": "some-access-id",
                "submission_link": "https://example.com/org/repo"
            })),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = test_support::read_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("GitHub"));
}

#[tokio::test]
async fn submit_rejects_missing_fields() {
    let _guard = test_support::env_lock();
    test_support::set_test_env();
    let (_state, app) = test_support::build_app();

    let response = app
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/v1/exam/submit",
            Some(json!({"submission_link": "https://github.com/org/repo"})),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
