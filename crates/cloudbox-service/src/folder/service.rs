//! Folder creation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use cloudbox_core::result::AppResult;
use cloudbox_database::EntryStore;
use cloudbox_entity::entry::{Entry, NewEntry, validate_name};

use crate::context::RequestContext;
use crate::folder::hierarchy::Hierarchy;

/// Request to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
    /// Parent folder ID (None for root-level).
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

/// Creates folders in the caller's tree.
#[derive(Debug, Clone)]
pub struct FolderService {
    store: Arc<dyn EntryStore>,
    hierarchy: Hierarchy,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self {
            hierarchy: Hierarchy::new(store.clone()),
            store,
        }
    }

    /// Creates a folder at root level or under an existing folder.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        req: CreateFolderRequest,
    ) -> AppResult<Entry> {
        let name = validate_name(&req.name)?;
        let parent = self.hierarchy.resolve_parent(ctx, req.parent_id).await?;
        let path = Hierarchy::placement_path(ctx, parent.as_ref(), name);

        let folder = self
            .store
            .insert(&NewEntry::folder(
                ctx.owner_id.as_str(),
                req.parent_id,
                name,
                path,
            ))
            .await?;

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder.id,
            path = %folder.path,
            "Folder created"
        );

        Ok(folder)
    }
}
