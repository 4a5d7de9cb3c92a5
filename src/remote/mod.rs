mod http;
mod types;

pub use http::{HttpFileService, StaticCredentials};
pub use types::{AccessConfig, Credential, FileUpload, UploadReceipt};

use async_trait::async_trait;

use crate::error::ServiceError;

/// The remote file service this crate orchestrates. Four operations, each a
/// network call that can succeed or fail; the manager converts every failure
/// into local state.
#[async_trait]
pub trait FileService: Send + Sync {
    async fn access_config(&self, credential: &Credential) -> Result<AccessConfig, ServiceError>;

    async fn list_files(&self, credential: &Credential) -> Result<Vec<String>, ServiceError>;

    async fn upload_file(
        &self,
        file: FileUpload,
        credential: &Credential,
    ) -> Result<UploadReceipt, ServiceError>;

    async fn delete_file(&self, filename: &str, credential: &Credential)
        -> Result<(), ServiceError>;
}

/// Supplies a fresh bearer token on demand. May return `None` when the
/// session is unauthenticated or the token fetch fails.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn credential(&self) -> Option<Credential>;
}
