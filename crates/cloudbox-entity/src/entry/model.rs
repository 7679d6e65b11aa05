//! Entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Content type recorded for folder entries.
pub const FOLDER_CONTENT_TYPE: &str = "folder";

/// A file or folder in an owner's tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique entry identifier, assigned by the server.
    pub id: Uuid,
    /// Display name; never empty.
    pub name: String,
    /// Logical location, e.g. `/dropbox/{owner}/photos/cat.png`.
    pub path: String,
    /// Size in bytes (0 for folders).
    pub size: i64,
    /// MIME type or asset category; [`FOLDER_CONTENT_TYPE`] for folders.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Where the bytes live at the asset host. Absent for folders.
    pub file_url: Option<String>,
    /// Preview image at the asset host.
    pub thumbnail_url: Option<String>,
    /// Identity provider subject that owns the entry.
    pub owner_id: String,
    /// Containing folder; `None` for root-level entries.
    pub parent_id: Option<Uuid>,
    /// Whether this entry is a container.
    pub is_folder: bool,
    /// User-toggled favourite flag.
    pub is_starred: bool,
    /// Soft-delete flag.
    pub is_trash: bool,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Check if this is a root-level entry (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check whether `owner_id` owns this entry.
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }
}

/// Data required to insert a new entry.
///
/// Star and trash flags always start cleared; id and timestamps are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Display name.
    pub name: String,
    /// Logical location.
    pub path: String,
    /// Size in bytes.
    pub size: i64,
    /// MIME type or asset category.
    pub content_type: String,
    /// Asset host URL (files only).
    pub file_url: Option<String>,
    /// Asset host preview URL.
    pub thumbnail_url: Option<String>,
    /// Owner of the new entry.
    pub owner_id: String,
    /// Containing folder.
    pub parent_id: Option<Uuid>,
    /// Whether the entry is a folder.
    pub is_folder: bool,
}

impl NewEntry {
    /// Describe a folder entry.
    pub fn folder(
        owner_id: impl Into<String>,
        parent_id: Option<Uuid>,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size: 0,
            content_type: FOLDER_CONTENT_TYPE.to_string(),
            file_url: None,
            thumbnail_url: None,
            owner_id: owner_id.into(),
            parent_id,
            is_folder: true,
        }
    }

    /// Materialize the row a store would persist for this data.
    pub fn into_entry(self, id: Uuid, now: DateTime<Utc>) -> Entry {
        Entry {
            id,
            name: self.name,
            path: self.path,
            size: self.size,
            content_type: self.content_type,
            file_url: self.file_url,
            thumbnail_url: self.thumbnail_url,
            owner_id: self.owner_id,
            parent_id: self.parent_id,
            is_folder: self.is_folder,
            is_starred: false,
            is_trash: false,
            created_at: now,
            updated_at: now,
        }
    }
}
