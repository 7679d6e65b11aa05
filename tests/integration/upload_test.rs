//! Integration tests for upload authorization and registration.

mod helpers;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

use cloudbox_assets::sign_payload;

#[tokio::test]
async fn test_upload_auth_returns_signed_parameters() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let before = Utc::now().timestamp();
    let response = app
        .request("GET", "/api/upload-auth", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let params = &response.body;
    let upload_token = helpers::field(params, "token");
    let expire = params["expire"].as_i64().expect("expire");

    assert_eq!(params["publicKey"], "public_test_key");
    assert_eq!(params["urlEndpoint"], "https://ik.imagekit.io/cloudbox");
    assert!(expire >= before + 1800 && expire <= Utc::now().timestamp() + 1800);

    let expected = sign_payload(helpers::TEST_PRIVATE_KEY, &format!("{upload_token}{expire}"))
        .expect("sign");
    assert_eq!(helpers::field(params, "signature"), expected);
}

#[tokio::test]
async fn test_upload_auth_tokens_are_unique() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let first = app
        .request("GET", "/api/upload-auth", None, Some(&token))
        .await;
    let second = app
        .request("GET", "/api/upload-auth", None, Some(&token))
        .await;

    assert_ne!(first.body["token"], second.body["token"]);
}

#[tokio::test]
async fn test_upload_auth_requires_session() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/upload-auth", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_auth_without_private_key_is_upstream_error() {
    let mut config = helpers::TestApp::new().await.config;
    config.assets.private_key = String::new();
    let app = helpers::TestApp::with_config(config);
    let token = app.token_for("user_alice");

    let response = app
        .request("GET", "/api/upload-auth", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_code(), Some("UPSTREAM_ERROR"));
}

#[tokio::test]
async fn test_register_upload_creates_root_file_entry() {
    let app = helpers::TestApp::new().await;

    let entry = app.upload("user_alice", "cat.png").await;

    assert_eq!(entry["name"], "cat.png");
    assert_eq!(entry["path"], "/dropbox/user_alice/cat.png");
    assert_eq!(entry["size"], 1024);
    assert_eq!(entry["type"], "image");
    assert_eq!(entry["fileUrl"], "https://ik.imagekit.io/cloudbox/cat.png");
    assert_eq!(entry["ownerId"], "user_alice");
    assert_eq!(entry["parentId"], serde_json::Value::Null);
    assert_eq!(entry["thumbnailUrl"], serde_json::Value::Null);
    assert_eq!(entry["isFolder"], false);
    assert_eq!(entry["isStarred"], false);
    assert_eq!(entry["isTrash"], false);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_register_upload_keeps_client_path_and_thumbnail() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({
                "userId": "user_alice",
                "imageKit": {
                    "url": "https://ik.imagekit.io/cloudbox/holiday/beach.jpg",
                    "name": "beach.jpg",
                    "filePath": "/holiday/beach.jpg",
                    "size": 2048,
                    "fileType": "image/jpeg",
                    "thumbnailUrl": "https://ik.imagekit.io/cloudbox/tr:n-thumb/beach.jpg",
                },
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["path"], "/holiday/beach.jpg");
    assert_eq!(response.body["type"], "image/jpeg");
    assert_eq!(
        response.body["thumbnailUrl"],
        "https://ik.imagekit.io/cloudbox/tr:n-thumb/beach.jpg"
    );
}

#[tokio::test]
async fn test_register_upload_for_other_owner_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({
                "userId": "user_bob",
                "imageKit": { "url": "https://ik.imagekit.io/cloudbox/x.png", "name": "x.png" },
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_register_upload_without_owner_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({
                "imageKit": { "url": "https://ik.imagekit.io/cloudbox/x.png" },
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_upload_without_descriptor_is_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({ "userId": "user_alice" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_register_upload_rejects_relative_url() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({
                "userId": "user_alice",
                "imageKit": { "url": "cat.png", "name": "cat.png" },
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_upload_with_malformed_json_is_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(axum::http::header::AUTHORIZATION, format!("Bearer {token}"))
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"userId\": "))
        .expect("request");
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_registering_twice_creates_two_entries() {
    let app = helpers::TestApp::new().await;

    let first = app.upload("user_alice", "cat.png").await;
    let second = app.upload("user_alice", "cat.png").await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(app.store.len().await, 2);
}

#[tokio::test]
async fn test_register_upload_fills_defaults() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({
                "userId": "user_alice",
                "imageKit": { "url": "https://host/x.png", "name": "", "thumbnailUrl": "" },
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "file");
    assert_eq!(response.body["type"], "image");
    assert_eq!(response.body["size"], 0);
    assert_eq!(response.body["path"], "/dropbox/user_alice/file");
    assert_eq!(response.body["thumbnailUrl"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_register_upload_without_session_leaves_store_empty() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/upload",
            Some(json!({
                "userId": "user_alice",
                "imageKit": {
                    "url": "https://ik.imagekit.io/cloudbox/cat.png",
                    "name": "cat.png",
                },
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("UNAUTHORIZED"));
    assert!(app.store.is_empty().await);
}
