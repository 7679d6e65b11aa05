//! The entry store abstraction shared by every persistence backend.

use async_trait::async_trait;
use uuid::Uuid;

use cloudbox_core::result::AppResult;
use cloudbox_entity::entry::{Entry, NewEntry};

/// Which entries of an owner a listing returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuery {
    /// Owner whose entries are listed.
    pub owner_id: String,
    /// Folder whose children are listed; `None` lists root-level entries.
    /// Ignored when `trashed` is set.
    pub parent_id: Option<Uuid>,
    /// List every trashed entry of the owner instead of a folder's
    /// non-trashed children.
    pub trashed: bool,
    /// Only return starred entries.
    pub starred_only: bool,
}

impl EntryQuery {
    /// Non-trashed children of `parent_id` (root level when `None`).
    pub fn children(owner_id: impl Into<String>, parent_id: Option<Uuid>) -> Self {
        Self {
            owner_id: owner_id.into(),
            parent_id,
            trashed: false,
            starred_only: false,
        }
    }

    /// Every trashed entry of the owner.
    pub fn trash(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            parent_id: None,
            trashed: true,
            starred_only: false,
        }
    }

    /// Whether `entry` belongs in this listing.
    pub fn matches(&self, entry: &Entry) -> bool {
        entry.owner_id == self.owner_id
            && (!self.starred_only || entry.is_starred)
            && if self.trashed {
                entry.is_trash
            } else {
                !entry.is_trash && entry.parent_id == self.parent_id
            }
    }
}

/// New placement of an entry: its parent, name, and resulting path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    /// New containing folder (`None` for root level).
    pub parent_id: Option<Uuid>,
    /// New name.
    pub name: String,
    /// New logical path.
    pub path: String,
}

/// Persistence for file/folder entries.
///
/// Implementations apply each call atomically. Same-owner and folder-only
/// parents are enforced by the service layer; acyclicity is re-checked by
/// [`EntryStore::relocate`] under the same lock as the update.
#[async_trait]
pub trait EntryStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new entry and return it with its id and timestamps.
    async fn insert(&self, data: &NewEntry) -> AppResult<Entry>;

    /// Find an entry by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Entry>>;

    /// List entries, folders first, then by name.
    async fn list(&self, query: &EntryQuery) -> AppResult<Vec<Entry>>;

    /// The chain from `id` up to its root, starting with the entry itself.
    ///
    /// Terminates even if the stored links contain a cycle.
    async fn find_ancestors(&self, id: Uuid) -> AppResult<Vec<Entry>>;

    /// Flip the star flag. Returns `None` if the entry does not exist.
    async fn toggle_starred(&self, id: Uuid) -> AppResult<Option<Entry>>;

    /// Flip the trash flag. Returns `None` if the entry does not exist.
    async fn toggle_trashed(&self, id: Uuid) -> AppResult<Option<Entry>>;

    /// Apply a rename and/or move, rewriting the paths of all descendants.
    ///
    /// Fails with a validation error when the new parent is the entry itself
    /// or one of its descendants.
    async fn relocate(&self, id: Uuid, to: &Relocation) -> AppResult<Option<Entry>>;

    /// Permanently delete an entry and its whole subtree.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
