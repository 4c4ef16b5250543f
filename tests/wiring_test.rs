//! Route wiring tests that never touch a database: the lazy pool
//! would fail on first use, so a passing test proves the request was
//! rejected before any repository call.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

fn app() -> axum::Router {
    wrenid::presentation::router::app(common::test_state(common::lazy_pool())).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_requires_auth() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/user")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["status"], 401);
}

#[tokio::test]
async fn test_create_requires_auth_before_body() {
    // A valid body must not matter: the gate runs first and the
    // repository is never reached.
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/user")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "username": "testuser",
                        "email": "test@example.com",
                        "password": "password123"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_auth() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/user/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_requires_auth() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/user/7")
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_bearer_scheme_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/user")
                .header("authorization", "Basic abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_forged_token_rejected() {
    use wrenid::domain::auth::AuthService;
    let forged = wrenid::infrastructure::auth::JwtAuthService::new("wrong-secret", 900)
        .generate_access_token(1)
        .unwrap();

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/user")
                .header("authorization", format!("Bearer {}", forged))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_numeric_id_rejected_at_boundary() {
    let token = common::generate_test_token(1);

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/user/abc")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_body_rejected_with_422() {
    // Authenticated, but the username is too short; validation fires
    // before the use case ever constructs a repository query.
    let token = common::generate_test_token(1);

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/user")
                .method("POST")
                .header("authorization", format!("Bearer {}", token))
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "username": "ab",
                        "email": "not-an-email",
                        "password": "short"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["paths"]["/v1/user/{id}"].is_object());
    assert!(json["paths"]["/v1/user/me"].is_object());
}
