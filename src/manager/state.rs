use super::status::StatusTracker;
use crate::error::FailureKind;

/// Result of the most recent upload attempt. The two variants are mutually
/// exclusive; a new attempt overwrites the previous outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success(String),
    Error { kind: FailureKind, message: String },
}

/// Everything the presentation layer renders, cloned out as a snapshot.
///
/// `management_access` defaults to denied until the access-config call
/// proves otherwise; it is recomputed each time the surface is opened.
#[derive(Debug, Clone, Default)]
pub struct ManagerState {
    pub surface_visible: bool,
    pub loading: bool,
    pub uploading: bool,
    pub management_access: bool,
    pub files: Vec<String>,
    pub deletion: StatusTracker,
    pub upload_outcome: Option<UploadOutcome>,
}

impl ManagerState {
    pub fn deletion_status(&self, filename: &str) -> Option<super::DeletionStatus> {
        self.deletion.get(filename)
    }
}
