//! Integration tests for entry listing and mutation.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

fn names(listing: &Value) -> Vec<&str> {
    listing
        .as_array()
        .expect("listing is an array")
        .iter()
        .map(|entry| helpers::field(entry, "name"))
        .collect()
}

#[tokio::test]
async fn test_list_root_orders_folders_first() {
    let app = helpers::TestApp::new().await;
    app.upload("user_alice", "b.png").await;
    app.upload("user_alice", "a.png").await;
    app.create_folder("user_alice", "Zeta", None).await;
    app.upload("user_bob", "bob.png").await;
    let token = app.token_for("user_alice");

    let response = app.request("GET", "/api/entries", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body), vec!["Zeta", "a.png", "b.png"]);
}

#[tokio::test]
async fn test_list_folder_children() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("user_alice", "Projects", None).await;
    let folder_id = helpers::field(&folder, "id");
    app.create_folder("user_alice", "2025", Some(folder_id)).await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "GET",
            &format!("/api/entries?parentId={folder_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body), vec!["2025"]);
}

#[tokio::test]
async fn test_list_foreign_folder_is_not_found() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("user_bob", "Private", None).await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "GET",
            &format!("/api/entries?parentId={}", helpers::field(&folder, "id")),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_entry() {
    let app = helpers::TestApp::new().await;
    let file = app.upload("user_alice", "cat.png").await;
    let id = helpers::field(&file, "id");

    let own = app
        .request("GET", &format!("/api/entries/{id}"), None, Some(&app.token_for("user_alice")))
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body, file);

    let foreign = app
        .request("GET", &format!("/api/entries/{id}"), None, Some(&app.token_for("user_bob")))
        .await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
    assert_eq!(foreign.error_code(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_invalid_entry_id_is_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let response = app
        .request("GET", "/api/entries/not-a-uuid", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_toggle_star_and_starred_filter() {
    let app = helpers::TestApp::new().await;
    let file = app.upload("user_alice", "cat.png").await;
    app.upload("user_alice", "dog.png").await;
    let token = app.token_for("user_alice");
    let uri = format!("/api/entries/{}/star", helpers::field(&file, "id"));

    let starred = app.request("PATCH", &uri, None, Some(&token)).await;
    assert_eq!(starred.status, StatusCode::OK);
    assert_eq!(starred.body["isStarred"], true);

    let listing = app
        .request("GET", "/api/entries?starred=true", None, Some(&token))
        .await;
    assert_eq!(names(&listing.body), vec!["cat.png"]);

    let unstarred = app.request("PATCH", &uri, None, Some(&token)).await;
    assert_eq!(unstarred.body["isStarred"], false);
}

#[tokio::test]
async fn test_trash_hides_entry_from_listing() {
    let app = helpers::TestApp::new().await;
    let file = app.upload("user_alice", "cat.png").await;
    app.upload("user_alice", "dog.png").await;
    let token = app.token_for("user_alice");
    let uri = format!("/api/entries/{}/trash", helpers::field(&file, "id"));

    let trashed = app.request("PATCH", &uri, None, Some(&token)).await;
    assert_eq!(trashed.status, StatusCode::OK);
    assert_eq!(trashed.body["isTrash"], true);

    let root = app.request("GET", "/api/entries", None, Some(&token)).await;
    assert_eq!(names(&root.body), vec!["dog.png"]);

    let trash = app
        .request("GET", "/api/entries?trash=true", None, Some(&token))
        .await;
    assert_eq!(names(&trash.body), vec!["cat.png"]);

    let restored = app.request("PATCH", &uri, None, Some(&token)).await;
    assert_eq!(restored.body["isTrash"], false);
}

#[tokio::test]
async fn test_toggle_on_foreign_entry_is_not_found() {
    let app = helpers::TestApp::new().await;
    let file = app.upload("user_bob", "bob.png").await;
    let token = app.token_for("user_alice");
    let id = helpers::field(&file, "id");

    for action in ["star", "trash"] {
        let response = app
            .request("PATCH", &format!("/api/entries/{id}/{action}"), None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{action}");
    }
}

#[tokio::test]
async fn test_rename_folder_rewrites_descendant_paths() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("user_alice", "Old", None).await;
    let folder_id = helpers::field(&folder, "id");
    let inner = app.create_folder("user_alice", "Inner", Some(folder_id)).await;
    let token = app.token_for("user_alice");

    let renamed = app
        .request(
            "PUT",
            &format!("/api/entries/{folder_id}/rename"),
            Some(json!({ "name": "New" })),
            Some(&token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["name"], "New");
    assert_eq!(renamed.body["path"], "/dropbox/user_alice/New");

    let inner = app
        .request(
            "GET",
            &format!("/api/entries/{}", helpers::field(&inner, "id")),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(inner.body["path"], "/dropbox/user_alice/New/Inner");
}

#[tokio::test]
async fn test_rename_with_empty_name_is_rejected() {
    let app = helpers::TestApp::new().await;
    let file = app.upload("user_alice", "cat.png").await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{}/rename", helpers::field(&file, "id")),
            Some(json!({ "name": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_move_file_into_folder_and_back() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("user_alice", "Photos", None).await;
    let file = app.upload("user_alice", "cat.png").await;
    let token = app.token_for("user_alice");
    let uri = format!("/api/entries/{}/move", helpers::field(&file, "id"));

    let moved = app
        .request("PUT", &uri, Some(json!({ "parentId": folder["id"] })), Some(&token))
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.body["parentId"], folder["id"]);
    assert_eq!(moved.body["path"], "/dropbox/user_alice/Photos/cat.png");

    let back = app
        .request("PUT", &uri, Some(json!({ "parentId": null })), Some(&token))
        .await;
    assert_eq!(back.status, StatusCode::OK);
    assert_eq!(back.body["parentId"], Value::Null);
    assert_eq!(back.body["path"], "/dropbox/user_alice/cat.png");
}

#[tokio::test]
async fn test_move_folder_into_own_descendant_is_rejected() {
    let app = helpers::TestApp::new().await;
    let top = app.create_folder("user_alice", "Top", None).await;
    let top_id = helpers::field(&top, "id");
    let child = app.create_folder("user_alice", "Child", Some(top_id)).await;
    let token = app.token_for("user_alice");
    let uri = format!("/api/entries/{top_id}/move");

    let into_child = app
        .request("PUT", &uri, Some(json!({ "parentId": child["id"] })), Some(&token))
        .await;
    assert_eq!(into_child.status, StatusCode::BAD_REQUEST);

    let into_self = app
        .request("PUT", &uri, Some(json!({ "parentId": top_id })), Some(&token))
        .await;
    assert_eq!(into_self.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_move_into_foreign_folder_is_not_found() {
    let app = helpers::TestApp::new().await;
    let bobs = app.create_folder("user_bob", "Private", None).await;
    let file = app.upload("user_alice", "cat.png").await;
    let token = app.token_for("user_alice");

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{}/move", helpers::field(&file, "id")),
            Some(json!({ "parentId": bobs["id"] })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_requires_trash_and_cascades() {
    let app = helpers::TestApp::new().await;
    let folder = app.create_folder("user_alice", "Old", None).await;
    let folder_id = helpers::field(&folder, "id");
    app.create_folder("user_alice", "Inner", Some(folder_id)).await;
    app.upload("user_alice", "keep.png").await;
    let token = app.token_for("user_alice");
    let uri = format!("/api/entries/{folder_id}");

    let refused = app.request("DELETE", &uri, None, Some(&token)).await;
    assert_eq!(refused.status, StatusCode::CONFLICT);
    assert_eq!(refused.error_code(), Some("CONFLICT"));

    app.request("PATCH", &format!("{uri}/trash"), None, Some(&token))
        .await;
    let deleted = app.request("DELETE", &uri, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(app.store.len().await, 1);

    let again = app.request("DELETE", &uri, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_foreign_entry_is_not_found() {
    let app = helpers::TestApp::new().await;
    let file = app.upload("user_bob", "bob.png").await;
    let bob = app.token_for("user_bob");
    let uri = format!("/api/entries/{}", helpers::field(&file, "id"));
    app.request("PATCH", &format!("{uri}/trash"), None, Some(&bob))
        .await;

    let response = app
        .request("DELETE", &uri, None, Some(&app.token_for("user_alice")))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_unknown_entry_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("user_alice");

    let response = app
        .request("GET", &format!("/api/entries/{}", Uuid::new_v4()), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rename_trims_padding_before_length_check() {
    let app = helpers::TestApp::new().await;
    let file = app.upload("user_alice", "cat.png").await;
    let token = app.token_for("user_alice");
    let longest = "x".repeat(255);

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{}/rename", helpers::field(&file, "id")),
            Some(json!({ "name": format!("  {longest}  ") })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], longest.as_str());

    let too_long = app
        .request(
            "PUT",
            &format!("/api/entries/{}/rename", helpers::field(&file, "id")),
            Some(json!({ "name": "y".repeat(256) })),
            Some(&token),
        )
        .await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);
}
