pub mod error;
pub mod manager;
pub mod remote;

pub use error::{FailureKind, ServiceError};
pub use manager::{
    DeletionStatus, ManagerState, StatusTracker, UploadManager, UploadOutcome,
    UPLOAD_ERROR_MESSAGE,
};
pub use remote::{
    AccessConfig, Credential, CredentialProvider, FileService, FileUpload, HttpFileService,
    StaticCredentials, UploadReceipt,
};
