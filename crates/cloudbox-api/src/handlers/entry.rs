//! Entry listing and mutation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use cloudbox_entity::Entry;

use crate::dto::request::{ListParams, MoveRequest, RenameRequest};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody, parse_uuid};
use crate::state::AppState;

/// GET /api/entries?parentId=&trash=&starred=
pub async fn list_entries(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let entries = state
        .entry_service
        .list_entries(&auth, params.into())
        .await?;
    Ok(Json(entries))
}

/// GET /api/entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.entry_service.get_entry(&auth, id).await?))
}

/// PATCH /api/entries/{id}/star
pub async fn toggle_star(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.entry_service.toggle_star(&auth, id).await?))
}

/// PATCH /api/entries/{id}/trash
pub async fn toggle_trash(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.entry_service.toggle_trash(&auth, id).await?))
}

/// PUT /api/entries/{id}/rename
pub async fn rename_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<RenameRequest>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.entry_service.rename(&auth, id, &req.name).await?))
}

/// PUT /api/entries/{id}/move
pub async fn move_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<MoveRequest>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_uuid(&id)?;
    let entry = state
        .entry_service
        .move_entry(&auth, id, req.parent_id)
        .await?;
    Ok(Json(entry))
}

/// DELETE /api/entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_uuid(&id)?;
    state.entry_service.delete_entry(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
