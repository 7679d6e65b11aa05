//! Upload authorization and registration handlers.

use axum::Json;
use axum::extract::State;

use cloudbox_core::traits::SignedUploadParameters;
use cloudbox_entity::Entry;
use cloudbox_service::RegisterUploadRequest;

use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// GET /api/upload-auth
pub async fn upload_auth(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SignedUploadParameters>, ApiError> {
    let params = state
        .credential_service
        .get_upload_credentials(&auth)
        .await?;
    Ok(Json(params))
}

/// POST /api/upload
pub async fn register_upload(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<RegisterUploadRequest>,
) -> Result<Json<Entry>, ApiError> {
    let entry = state
        .upload_service
        .register_upload(&auth, req)
        .await?;
    Ok(Json(entry))
}
