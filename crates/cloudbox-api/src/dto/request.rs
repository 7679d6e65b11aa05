//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use cloudbox_service::{CreateFolderRequest, ListEntriesRequest};

/// Folder creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderBody {
    /// Folder name.
    #[validate(length(min = 1, message = "Folder name is required"))]
    pub name: String,
    /// Parent folder; root level when absent.
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

impl From<CreateFolderBody> for CreateFolderRequest {
    fn from(body: CreateFolderBody) -> Self {
        Self {
            name: body.name,
            parent_id: body.parent_id,
        }
    }
}

/// Rename body. Name rules are applied by the entry service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRequest {
    /// New name.
    pub name: String,
}

/// Move body. A missing or null `parentId` moves to the root level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Destination folder.
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

/// Query string of `GET /api/entries`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Folder to list.
    pub parent_id: Option<Uuid>,
    /// List the trash.
    pub trash: Option<bool>,
    /// Only starred entries.
    pub starred: Option<bool>,
}

impl From<ListParams> for ListEntriesRequest {
    fn from(params: ListParams) -> Self {
        Self {
            parent_id: params.parent_id,
            trash: params.trash.unwrap_or(false),
            starred: params.starred.unwrap_or(false),
        }
    }
}
