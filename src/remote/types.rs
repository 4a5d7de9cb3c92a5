use serde::Deserialize;

/// Bearer token proving the caller's identity to the remote file service.
/// Fetched fresh per operation and never cached by the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

/// Extensions the file picker offers. Client-side filter only, not a
/// security boundary.
const ACCEPTED_EXTENSIONS: [&str; 14] = [
    "txt", "md", "json", "png", "jpg", "jpeg", "bmp", "heic", "tiff", "pdf", "docx", "xlsx",
    "pptx", "html",
];

/// A single file selected for upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

/// Server-side access configuration for the current identity.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AccessConfig {
    #[serde(rename = "hasGroupAccess")]
    pub has_management_access: bool,
}

/// Server acknowledgement for an accepted upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    pub message: String,
}
