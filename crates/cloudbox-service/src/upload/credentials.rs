//! Upload credential issuance.

use std::sync::Arc;

use tracing::info;

use cloudbox_core::result::AppResult;
use cloudbox_core::traits::{SignedUploadParameters, UploadCredentialIssuer};

use crate::context::RequestContext;

/// Hands authenticated callers signed parameters for the asset host.
#[derive(Debug, Clone)]
pub struct CredentialService {
    issuer: Arc<dyn UploadCredentialIssuer>,
}

impl CredentialService {
    /// Creates a credential service backed by `issuer`.
    pub fn new(issuer: Arc<dyn UploadCredentialIssuer>) -> Self {
        Self { issuer }
    }

    /// Issues a fresh set of upload parameters for the caller.
    pub async fn get_upload_credentials(
        &self,
        ctx: &RequestContext,
    ) -> AppResult<SignedUploadParameters> {
        let params = self.issuer.issue(&ctx.identity()).await?;
        info!(owner_id = %ctx.owner_id, expire = params.expire, "Upload credentials granted");
        Ok(params)
    }
}
