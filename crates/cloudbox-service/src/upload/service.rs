//! Registration of assets the client already uploaded to the asset host.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

use cloudbox_core::error::AppError;
use cloudbox_core::result::AppResult;
use cloudbox_database::EntryStore;
use cloudbox_entity::entry::{Entry, NewEntry, root_path};

use crate::context::RequestContext;

const DEFAULT_NAME: &str = "file";
const DEFAULT_CONTENT_TYPE: &str = "image";

/// Metadata the asset host returned for a completed upload.
///
/// Every field is optional on the wire; [`UploadService::register_upload`]
/// decides which are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    /// Public URL of the uploaded bytes.
    pub url: Option<String>,
    /// File name at the host.
    pub name: Option<String>,
    /// Logical path to record.
    #[serde(alias = "filePath")]
    pub path: Option<String>,
    /// Size in bytes.
    pub size: Option<i64>,
    /// MIME type or asset category.
    #[serde(rename = "type", alias = "fileType")]
    pub content_type: Option<String>,
    /// Preview image URL.
    pub thumbnail_url: Option<String>,
}

/// Body of an upload registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUploadRequest {
    /// Owner the client believes it is registering for.
    #[serde(alias = "userId")]
    pub owner_id: Option<String>,
    /// Descriptor returned by the asset host.
    #[serde(alias = "imageKit")]
    pub descriptor: Option<AssetDescriptor>,
}

/// Turns asset host descriptors into root-level file entries.
#[derive(Debug, Clone)]
pub struct UploadService {
    store: Arc<dyn EntryStore>,
}

/// Treat empty strings as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Records an uploaded asset as a file entry owned by the caller.
    ///
    /// Not idempotent: registering the same descriptor twice creates two
    /// entries.
    pub async fn register_upload(
        &self,
        ctx: &RequestContext,
        req: RegisterUploadRequest,
    ) -> AppResult<Entry> {
        match req.owner_id.as_deref() {
            Some(owner_id) if owner_id == ctx.owner_id => {}
            _ => {
                return Err(AppError::unauthorized(
                    "Upload owner does not match the authenticated user",
                ));
            }
        }

        let descriptor = req
            .descriptor
            .ok_or_else(|| AppError::validation("Asset descriptor is required"))?;
        let url = present(descriptor.url)
            .ok_or_else(|| AppError::validation("Asset descriptor has no url"))?;
        Url::parse(&url).map_err(|_| AppError::validation("Asset url must be an absolute URL"))?;

        let size = descriptor.size.unwrap_or(0);
        if size < 0 {
            return Err(AppError::validation("Asset size cannot be negative"));
        }

        let name = present(descriptor.name).unwrap_or_else(|| DEFAULT_NAME.to_string());
        let path = present(descriptor.path).unwrap_or_else(|| root_path(&ctx.owner_id, &name));
        let new_entry = NewEntry {
            path,
            size,
            content_type: present(descriptor.content_type)
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            file_url: Some(url),
            thumbnail_url: present(descriptor.thumbnail_url),
            owner_id: ctx.owner_id.clone(),
            parent_id: None,
            is_folder: false,
            name,
        };

        let entry = self.store.insert(&new_entry).await.inspect_err(|e| {
            error!(owner_id = %ctx.owner_id, error = %e, "Failed to register upload");
        })?;

        info!(
            owner_id = %ctx.owner_id,
            entry_id = %entry.id,
            size = entry.size,
            "Upload registered"
        );

        Ok(entry)
    }
}
