//! Route definitions for the Cloudbox HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, patch, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;
    let max_body = server.max_body_bytes;
    let timeout = Duration::from_secs(server.request_timeout_seconds);
    let cors = middleware::cors::build_cors_layer(&server.cors);

    let api_routes = Router::new()
        .merge(upload_routes())
        .merge(folder_routes())
        .merge(entry_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Upload authorization and registration
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/upload-auth", get(handlers::upload::upload_auth))
        .route("/upload", post(handlers::upload::register_upload))
}

/// Folder creation
fn folder_routes() -> Router<AppState> {
    Router::new().route("/folders/create", post(handlers::folder::create_folder))
}

/// Entry listing, flags, rename, move and delete
fn entry_routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(handlers::entry::list_entries))
        .route(
            "/entries/{id}",
            get(handlers::entry::get_entry).delete(handlers::entry::delete_entry),
        )
        .route("/entries/{id}/star", patch(handlers::entry::toggle_star))
        .route("/entries/{id}/trash", patch(handlers::entry::toggle_trash))
        .route("/entries/{id}/rename", put(handlers::entry::rename_entry))
        .route("/entries/{id}/move", put(handlers::entry::move_entry))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
