//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use cloudbox_core::config::AppConfig;
use cloudbox_core::traits::{IdentityVerifier, UploadCredentialIssuer};
use cloudbox_database::EntryStore;
use cloudbox_service::{CredentialService, EntryService, FolderService, UploadService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Entry persistence
    pub store: Arc<dyn EntryStore>,
    /// Session token verification
    pub identity: Arc<dyn IdentityVerifier>,

    /// Upload credential issuance
    pub credential_service: Arc<CredentialService>,
    /// Upload registration
    pub upload_service: Arc<UploadService>,
    /// Folder creation
    pub folder_service: Arc<FolderService>,
    /// Entry listing and mutation
    pub entry_service: Arc<EntryService>,

    /// When the state was built, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wires the services around a store, an identity verifier and an
    /// upload credential issuer.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn EntryStore>,
        identity: Arc<dyn IdentityVerifier>,
        issuer: Arc<dyn UploadCredentialIssuer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            credential_service: Arc::new(CredentialService::new(issuer)),
            upload_service: Arc::new(UploadService::new(Arc::clone(&store))),
            folder_service: Arc::new(FolderService::new(Arc::clone(&store))),
            entry_service: Arc::new(EntryService::new(Arc::clone(&store))),
            store,
            identity,
            started_at: Instant::now(),
        }
    }
}
