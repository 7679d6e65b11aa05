//! Ownership and tree-integrity checks applied before any write.

use std::sync::Arc;

use uuid::Uuid;

use cloudbox_core::error::AppError;
use cloudbox_core::result::AppResult;
use cloudbox_database::EntryStore;
use cloudbox_entity::entry::{Entry, child_path, root_path};

use crate::context::RequestContext;

/// Resolves entries on behalf of a caller and guards parent links.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    store: Arc<dyn EntryStore>,
}

impl Hierarchy {
    /// Creates a guard over `store`.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Loads an entry the caller owns.
    ///
    /// Entries of other owners are reported as missing.
    pub async fn owned_entry(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Entry> {
        self.store
            .find_by_id(id)
            .await?
            .filter(|entry| ctx.owns(entry))
            .ok_or_else(|| AppError::not_found("Entry not found"))
    }

    /// Validates a requested parent: it must be a non-trashed folder the
    /// caller owns. `None` means root level.
    pub async fn resolve_parent(
        &self,
        ctx: &RequestContext,
        parent_id: Option<Uuid>,
    ) -> AppResult<Option<Entry>> {
        let Some(parent_id) = parent_id else {
            return Ok(None);
        };

        let parent = self
            .store
            .find_by_id(parent_id)
            .await?
            .filter(|entry| ctx.owns(entry))
            .ok_or_else(|| AppError::not_found("Parent folder not found"))?;

        if !parent.is_folder {
            return Err(AppError::validation("Parent is not a folder"));
        }
        if parent.is_trash {
            return Err(AppError::validation("Parent folder is in the trash"));
        }
        Ok(Some(parent))
    }

    /// Rejects placing `entry_id` under `parent_id` when that parent is the
    /// entry itself or one of its descendants.
    pub async fn ensure_no_cycle(&self, entry_id: Uuid, parent_id: Uuid) -> AppResult<()> {
        if entry_id == parent_id {
            return Err(AppError::validation("Cannot move an entry into itself"));
        }

        let ancestors = self.store.find_ancestors(parent_id).await?;
        if ancestors.iter().any(|ancestor| ancestor.id == entry_id) {
            return Err(AppError::validation(
                "Cannot move an entry into one of its descendants",
            ));
        }
        Ok(())
    }

    /// Logical path of `name` placed under `parent`, or at the caller's root.
    pub fn placement_path(ctx: &RequestContext, parent: Option<&Entry>, name: &str) -> String {
        match parent {
            Some(parent) => child_path(&parent.path, name),
            None => root_path(&ctx.owner_id, name),
        }
    }
}
