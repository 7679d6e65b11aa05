//! Entry listing, flags, rename, move and permanent deletion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use cloudbox_core::error::AppError;
use cloudbox_core::result::AppResult;
use cloudbox_database::{EntryQuery, EntryStore, Relocation};
use cloudbox_entity::entry::{Entry, renamed_path, validate_name};

use crate::context::RequestContext;
use crate::folder::hierarchy::Hierarchy;

/// Filters for listing entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesRequest {
    /// Folder to list; root level when absent.
    pub parent_id: Option<Uuid>,
    /// List the trash instead of a folder.
    #[serde(default)]
    pub trash: bool,
    /// Only starred entries.
    #[serde(default)]
    pub starred: bool,
}

/// Operations on entries the caller already owns.
#[derive(Debug, Clone)]
pub struct EntryService {
    store: Arc<dyn EntryStore>,
    hierarchy: Hierarchy,
}

impl EntryService {
    /// Creates a new entry service.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self {
            hierarchy: Hierarchy::new(store.clone()),
            store,
        }
    }

    /// Gets an entry by ID.
    pub async fn get_entry(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Entry> {
        self.hierarchy.owned_entry(ctx, id).await
    }

    /// Lists a folder's children, the root level, or the trash.
    pub async fn list_entries(
        &self,
        ctx: &RequestContext,
        req: ListEntriesRequest,
    ) -> AppResult<Vec<Entry>> {
        let mut query = if req.trash {
            EntryQuery::trash(ctx.owner_id.as_str())
        } else {
            if let Some(parent_id) = req.parent_id {
                self.hierarchy.owned_entry(ctx, parent_id).await?;
            }
            EntryQuery::children(ctx.owner_id.as_str(), req.parent_id)
        };
        query.starred_only = req.starred;

        self.store.list(&query).await
    }

    /// Flips the star flag.
    pub async fn toggle_star(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Entry> {
        self.hierarchy.owned_entry(ctx, id).await?;
        let entry = self
            .store
            .toggle_starred(id)
            .await?
            .ok_or_else(|| AppError::not_found("Entry not found"))?;

        info!(owner_id = %ctx.owner_id, entry_id = %id, starred = entry.is_starred, "Star toggled");
        Ok(entry)
    }

    /// Moves an entry to the trash, or restores it.
    pub async fn toggle_trash(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Entry> {
        self.hierarchy.owned_entry(ctx, id).await?;
        let entry = self
            .store
            .toggle_trashed(id)
            .await?
            .ok_or_else(|| AppError::not_found("Entry not found"))?;

        info!(owner_id = %ctx.owner_id, entry_id = %id, trashed = entry.is_trash, "Trash toggled");
        Ok(entry)
    }

    /// Renames an entry, rewriting the paths below it.
    pub async fn rename(&self, ctx: &RequestContext, id: Uuid, name: &str) -> AppResult<Entry> {
        let name = validate_name(name)?;
        let entry = self.hierarchy.owned_entry(ctx, id).await?;

        let relocation = Relocation {
            parent_id: entry.parent_id,
            name: name.to_string(),
            path: renamed_path(&entry.path, name),
        };
        let renamed = self.relocate(id, &relocation).await?;

        info!(owner_id = %ctx.owner_id, entry_id = %id, name = %renamed.name, "Entry renamed");
        Ok(renamed)
    }

    /// Moves an entry under another folder, or to the root level.
    pub async fn move_entry(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        parent_id: Option<Uuid>,
    ) -> AppResult<Entry> {
        let entry = self.hierarchy.owned_entry(ctx, id).await?;
        let parent = self.hierarchy.resolve_parent(ctx, parent_id).await?;
        if let Some(parent) = &parent {
            self.hierarchy.ensure_no_cycle(id, parent.id).await?;
        }

        let relocation = Relocation {
            parent_id,
            path: Hierarchy::placement_path(ctx, parent.as_ref(), &entry.name),
            name: entry.name,
        };
        let moved = self.relocate(id, &relocation).await?;

        info!(owner_id = %ctx.owner_id, entry_id = %id, path = %moved.path, "Entry moved");
        Ok(moved)
    }

    /// Permanently deletes a trashed entry and everything below it.
    pub async fn delete_entry(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let entry = self.hierarchy.owned_entry(ctx, id).await?;
        if !entry.is_trash {
            return Err(AppError::conflict(
                "Only entries in the trash can be deleted permanently",
            ));
        }

        if !self.store.delete(id).await? {
            return Err(AppError::not_found("Entry not found"));
        }

        info!(owner_id = %ctx.owner_id, entry_id = %id, path = %entry.path, "Entry deleted");
        Ok(())
    }

    async fn relocate(&self, id: Uuid, relocation: &Relocation) -> AppResult<Entry> {
        self.store
            .relocate(id, relocation)
            .await?
            .ok_or_else(|| AppError::not_found("Entry not found"))
    }
}
