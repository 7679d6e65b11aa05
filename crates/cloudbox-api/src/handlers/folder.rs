//! Folder handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use validator::Validate;

use cloudbox_core::error::AppError;
use cloudbox_entity::Entry;

use crate::dto::request::CreateFolderBody;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/folders/create
///
/// A body that cannot be read as JSON is an internal failure here, unlike
/// the other JSON routes; name rule violations are still validation errors.
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateFolderBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        AppError::internal(format!("Failed to read folder request: {}", rejection.body_text()))
    })?;
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(&auth, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(folder)))
}
