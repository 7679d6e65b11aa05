//! Integration tests for folder creation.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_root_folder() {
    let app = helpers::TestApp::new().await;

    let folder = app.create_folder("user_alice", "Projects", None).await;

    assert_eq!(folder["name"], "Projects");
    assert_eq!(folder["path"], "/dropbox/user_alice/Projects");
    assert_eq!(folder["type"], "folder");
    assert_eq!(folder["isFolder"], true);
    assert_eq!(folder["size"], 0);
    assert_eq!(folder["fileUrl"], serde_json::Value::Null);
    assert_eq!(folder["parentId"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_create_nested_folder_extends_parent_path() {
    let app = helpers::TestApp::new().await;
    let parent = app.create_folder("user_alice", "Projects", None).await;
    let parent_id = helpers::field(&parent, "id");

    let child = app
        .create_folder("user_alice", "2025", Some(parent_id))
        .await;

    assert_eq!(child["parentId"], parent["id"]);
    assert_eq!(child["path"], "/dropbox/user_alice/Projects/2025");
}

#[tokio::test]
async fn test_create_folder_trims_name() {
    let app = helpers::TestApp::new().await;

    let folder = app.create_folder("user_alice", "  Reports  ", None).await;

    assert_eq!(folder["name"], "Reports");
}

#[tokio::test]
async fn test_create_folder_with_empty_name_is_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    for name in ["", "   ", "a/b", ".."] {
        let response = app
            .request(
                "POST",
                "/api/folders/create",
                Some(json!({ "name": name })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "name {name:?}");
        assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
    }
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_create_folder_under_unknown_parent_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "POST",
            "/api/folders/create",
            Some(json!({ "name": "Orphan", "parentId": Uuid::new_v4() })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_folder_under_foreign_parent_is_not_found() {
    let app = helpers::TestApp::new().await;
    let bobs = app.create_folder("user_bob", "Private", None).await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "POST",
            "/api/folders/create",
            Some(json!({ "name": "Sneaky", "parentId": bobs["id"] })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_create_folder_under_file_is_rejected() {
    let app = helpers::TestApp::new().await;
    let file = app.upload("user_alice", "cat.png").await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "POST",
            "/api/folders/create",
            Some(json!({ "name": "Inside", "parentId": file["id"] })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_folder_requires_session() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/folders/create",
            Some(json!({ "name": "Projects" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_folder_with_unreadable_body_is_internal_failure() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    for body in ["{\"name\": ", "[1, 2]", "{\"name\": 42}"] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/folders/create")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request");
        let response = app.send(request).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "body {body}");
        assert_eq!(response.error_code(), Some("INTERNAL_ERROR"));
    }
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_create_folder_without_session_ignores_body() {
    let app = helpers::TestApp::new().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/folders/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .expect("request");
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
