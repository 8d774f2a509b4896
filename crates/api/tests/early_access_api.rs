//! HTTP-level integration tests for early-access signups.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_raw};
use ctrl_db::repositories::EarlyAccessRepo;
use serde_json::json;

#[tokio::test]
async fn test_create_request_returns_id_without_message() {
    let pool = common::test_pool().await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/early-access",
        json!({"name": "Ada", "email": "ada@example.com", "role": "Engineer", "message": "Hi"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["id"].is_number());
    assert!(json.get("message").is_none());

    let stored = EarlyAccessRepo::find_by_id(&pool, json["id"].as_i64().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.message.as_deref(), Some("Hi"));
}

#[tokio::test]
async fn test_missing_email_returns_400_and_creates_nothing() {
    let pool = common::test_pool().await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/early-access",
        json!({"name": "Ada", "role": "Engineer"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required field: email");

    assert!(EarlyAccessRepo::list_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_wrongly_typed_or_unlabelled_body_returns_json_400() {
    let pool = common::test_pool().await;

    let cases = [
        (Some("application/json"), r#"{"name":"Ada","email":5,"role":"Engineer"}"#),
        (Some("application/json"), r#"{"name":"Ada","email":"a@b.c","role":"Engineer","message":false}"#),
        (None, r#"{"name":"Ada","email":"a@b.c","role":"Engineer"}"#),
        (Some("application/json"), "[1, 2"),
    ];

    for (content_type, body) in cases {
        let response = post_raw(
            common::build_test_app(pool.clone()),
            "/api/early-access",
            content_type,
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }

    assert!(EarlyAccessRepo::list_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_newest_first_with_default_message() {
    let pool = common::test_pool().await;
    for name in ["Ada", "Lin"] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/early-access",
            json!({"name": name, "email": "x@example.com", "role": "PM"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(common::build_test_app(pool), "/api/early-access").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Lin");
    assert_eq!(list[1]["name"], "Ada");
    assert_eq!(list[0]["message"], "");
    assert_eq!(list[0]["role"], "PM");
}

#[tokio::test]
async fn test_delete_request_is_idempotent() {
    let pool = common::test_pool().await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/early-access",
        json!({"name": "Ada", "email": "ada@example.com", "role": "Engineer"}),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    for uri in [
        format!("/api/early-access/{id}"),
        format!("/api/early-access/{id}"),
        "/api/early-access/4040".to_string(),
    ] {
        let response = delete(common::build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await, json!({"success": true}));
    }

    assert!(EarlyAccessRepo::list_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let pool = common::test_pool().await;
    let response = delete(common::build_test_app(pool), "/api/early-access/nope").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Request ID is required");
}
