//! In-memory entry store using a Tokio lock for single-node deployments.
//!
//! Mirrors the PostgreSQL repository's semantics, including cascade on
//! delete and descendant path rewriting on relocation. Used by the test
//! suites and for running the server without a database.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use cloudbox_core::error::AppError;
use cloudbox_core::result::AppResult;
use cloudbox_entity::entry::{Entry, NewEntry, rebase_path};

use crate::store::{EntryQuery, EntryStore, Relocation};

/// In-memory [`EntryStore`] keyed by entry ID.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntryStore {
    /// Protected entry table.
    entries: Arc<RwLock<HashMap<Uuid, Entry>>>,
}

impl MemoryEntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entries across all owners.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// IDs of every descendant of `root`, excluding `root` itself.
fn descendant_ids(entries: &HashMap<Uuid, Entry>, root: Uuid) -> Vec<Uuid> {
    let mut found = Vec::new();
    let mut seen = HashSet::from([root]);
    let mut frontier = vec![root];

    while let Some(parent) = frontier.pop() {
        for entry in entries.values() {
            if entry.parent_id == Some(parent) && seen.insert(entry.id) {
                found.push(entry.id);
                frontier.push(entry.id);
            }
        }
    }

    found
}

/// Whether `target` is `start` or one of its ancestors.
fn ancestor_chain_contains(entries: &HashMap<Uuid, Entry>, start: Uuid, target: Uuid) -> bool {
    let mut seen = HashSet::new();
    let mut cursor = Some(start);

    while let Some(current) = cursor {
        if current == target {
            return true;
        }
        if !seen.insert(current) {
            return false;
        }
        cursor = entries.get(&current).and_then(|entry| entry.parent_id);
    }
    false
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn insert(&self, data: &NewEntry) -> AppResult<Entry> {
        let mut entries = self.entries.write().await;

        if let Some(parent_id) = data.parent_id {
            if !entries.contains_key(&parent_id) {
                return Err(AppError::not_found("Parent folder not found"));
            }
        }

        let entry = data.clone().into_entry(Uuid::now_v7(), Utc::now());
        entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Entry>> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn list(&self, query: &EntryQuery) -> AppResult<Vec<Entry>> {
        let entries = self.entries.read().await;
        let mut listed: Vec<Entry> = entries
            .values()
            .filter(|entry| query.matches(entry))
            .cloned()
            .collect();

        listed.sort_by(|a, b| {
            b.is_folder
                .cmp(&a.is_folder)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(listed)
    }

    async fn find_ancestors(&self, id: Uuid) -> AppResult<Vec<Entry>> {
        let entries = self.entries.read().await;
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = Some(id);

        while let Some(current) = cursor {
            if !seen.insert(current) {
                break;
            }
            let Some(entry) = entries.get(&current) else {
                break;
            };
            cursor = entry.parent_id;
            chain.push(entry.clone());
        }

        Ok(chain)
    }

    async fn toggle_starred(&self, id: Uuid) -> AppResult<Option<Entry>> {
        let mut entries = self.entries.write().await;
        Ok(entries.get_mut(&id).map(|entry| {
            entry.is_starred = !entry.is_starred;
            entry.updated_at = Utc::now();
            entry.clone()
        }))
    }

    async fn toggle_trashed(&self, id: Uuid) -> AppResult<Option<Entry>> {
        let mut entries = self.entries.write().await;
        Ok(entries.get_mut(&id).map(|entry| {
            entry.is_trash = !entry.is_trash;
            entry.updated_at = Utc::now();
            entry.clone()
        }))
    }

    async fn relocate(&self, id: Uuid, to: &Relocation) -> AppResult<Option<Entry>> {
        let mut entries = self.entries.write().await;
        let now = Utc::now();

        if !entries.contains_key(&id) {
            return Ok(None);
        }
        if let Some(parent_id) = to.parent_id {
            if ancestor_chain_contains(&entries, parent_id, id) {
                return Err(AppError::validation(
                    "Cannot move an entry into one of its descendants",
                ));
            }
        }

        let Some(entry) = entries.get_mut(&id) else {
            return Ok(None);
        };
        let old_path = std::mem::replace(&mut entry.path, to.path.clone());
        entry.parent_id = to.parent_id;
        entry.name = to.name.clone();
        entry.updated_at = now;
        let relocated = entry.clone();

        let descendants = descendant_ids(&entries, id);
        for child_id in &descendants {
            if let Some(child) = entries.get_mut(child_id) {
                if let Some(path) = rebase_path(&child.path, &old_path, &to.path) {
                    child.path = path;
                    child.updated_at = now;
                }
            }
        }

        debug!(entry_id = %id, descendants = descendants.len(), "Entry relocated");
        Ok(Some(relocated))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(&id) {
            return Ok(false);
        }

        for child_id in descendant_ids(&entries, id) {
            entries.remove(&child_id);
        }
        entries.remove(&id);
        Ok(true)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
