//! Entry repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use cloudbox_core::error::{AppError, ErrorKind};
use cloudbox_core::result::AppResult;
use cloudbox_entity::entry::{Entry, NewEntry};

use crate::store::{EntryQuery, EntryStore, Relocation};

const ORDER_BY: &str = "ORDER BY is_folder DESC, name ASC, created_at ASC";

/// Repository for entry CRUD and tree queries on PostgreSQL.
#[derive(Debug, Clone)]
pub struct EntryRepository {
    pool: PgPool,
}

impl EntryRepository {
    /// Create a new entry repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryStore for EntryRepository {
    async fn insert(&self, data: &NewEntry) -> AppResult<Entry> {
        sqlx::query_as::<_, Entry>(
            "INSERT INTO entries \
                (id, name, path, size, content_type, file_url, thumbnail_url, owner_id, parent_id, is_folder) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.name)
        .bind(&data.path)
        .bind(data.size)
        .bind(&data.content_type)
        .bind(&data.file_url)
        .bind(&data.thumbnail_url)
        .bind(&data.owner_id)
        .bind(data.parent_id)
        .bind(data.is_folder)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("entries_parent_id_fkey") =>
            {
                AppError::not_found("Parent folder not found")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert entry", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Entry>> {
        sqlx::query_as::<_, Entry>("SELECT * FROM entries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find entry", e))
    }

    async fn list(&self, query: &EntryQuery) -> AppResult<Vec<Entry>> {
        let result = if query.trashed {
            sqlx::query_as::<_, Entry>(&format!(
                "SELECT * FROM entries \
                 WHERE owner_id = $1 AND is_trash = TRUE AND ($2 = FALSE OR is_starred = TRUE) \
                 {ORDER_BY}"
            ))
            .bind(&query.owner_id)
            .bind(query.starred_only)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, Entry>(&format!(
                "SELECT * FROM entries \
                 WHERE owner_id = $1 AND is_trash = FALSE \
                   AND parent_id IS NOT DISTINCT FROM $2 \
                   AND ($3 = FALSE OR is_starred = TRUE) \
                 {ORDER_BY}"
            ))
            .bind(&query.owner_id)
            .bind(query.parent_id)
            .bind(query.starred_only)
            .fetch_all(&self.pool)
            .await
        };

        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list entries", e))
    }

    async fn find_ancestors(&self, id: Uuid) -> AppResult<Vec<Entry>> {
        // The level cap bounds recursion if stored links ever form a cycle.
        sqlx::query_as::<_, AncestorRow>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT e.*, 0 AS level FROM entries e WHERE e.id = $1 \
                UNION ALL \
                SELECT p.*, a.level + 1 FROM entries p INNER JOIN ancestors a ON p.id = a.parent_id \
                WHERE a.level < 10000 \
             ) SELECT DISTINCT ON (id) * FROM ancestors ORDER BY id, level",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map(|mut rows: Vec<AncestorRow>| {
            rows.sort_by_key(|row| row.level);
            rows.into_iter().map(|row| row.entry).collect()
        })
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ancestors", e))
    }

    async fn toggle_starred(&self, id: Uuid) -> AppResult<Option<Entry>> {
        sqlx::query_as::<_, Entry>(
            "UPDATE entries SET is_starred = NOT is_starred, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle star", e))
    }

    async fn toggle_trashed(&self, id: Uuid) -> AppResult<Option<Entry>> {
        sqlx::query_as::<_, Entry>(
            "UPDATE entries SET is_trash = NOT is_trash, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle trash", e))
    }

    async fn relocate(&self, id: Uuid, to: &Relocation) -> AppResult<Option<Entry>> {
        let db_err = |msg: &'static str| {
            move |e: sqlx::Error| AppError::with_source(ErrorKind::Database, msg, e)
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let owner_id: Option<String> =
            sqlx::query_scalar("SELECT owner_id FROM entries WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_err("Failed to find entry"))?;

        let Some(owner_id) = owner_id else {
            return Ok(None);
        };

        // Relocations of one owner run one at a time so the ancestor check
        // below sees every committed move.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(&owner_id)
            .execute(&mut *tx)
            .await
            .map_err(db_err("Failed to lock owner tree"))?;

        let old_path: Option<String> =
            sqlx::query_scalar("SELECT path FROM entries WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_err("Failed to lock entry"))?;

        let Some(old_path) = old_path else {
            return Ok(None);
        };

        if let Some(parent_id) = to.parent_id {
            let creates_cycle: bool = sqlx::query_scalar(
                "WITH RECURSIVE chain AS ( \
                    SELECT id, parent_id, 0 AS level FROM entries WHERE id = $1 \
                    UNION ALL \
                    SELECT e.id, e.parent_id, c.level + 1 FROM entries e \
                    INNER JOIN chain c ON e.id = c.parent_id \
                    WHERE c.level < 10000 \
                 ) SELECT EXISTS (SELECT 1 FROM chain WHERE id = $2)",
            )
            .bind(parent_id)
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_err("Failed to check ancestors"))?;

            if creates_cycle {
                return Err(AppError::validation(
                    "Cannot move an entry into one of its descendants",
                ));
            }
        }

        let entry = sqlx::query_as::<_, Entry>(
            "UPDATE entries SET parent_id = $2, name = $3, path = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(to.parent_id)
        .bind(&to.name)
        .bind(&to.path)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err("Failed to relocate entry"))?;

        sqlx::query(
            "WITH RECURSIVE subtree AS ( \
                SELECT id FROM entries WHERE parent_id = $1 \
                UNION \
                SELECT e.id FROM entries e INNER JOIN subtree s ON e.parent_id = s.id \
             ) \
             UPDATE entries \
             SET path = $3 || substr(path, char_length($2) + 1), updated_at = NOW() \
             WHERE id IN (SELECT id FROM subtree) AND left(path, char_length($2) + 1) = $2 || '/'",
        )
        .bind(id)
        .bind(&old_path)
        .bind(&to.path)
        .execute(&mut *tx)
        .await
        .map_err(db_err("Failed to rewrite descendant paths"))?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit relocation"))?;

        Ok(Some(entry))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete entry", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

/// Ancestor query row: the entry plus its distance from the starting entry.
#[derive(Debug, sqlx::FromRow)]
struct AncestorRow {
    #[sqlx(flatten)]
    entry: Entry,
    level: i32,
}
