mod state;
mod status;

pub use state::{ManagerState, UploadOutcome};
pub use status::{DeletionStatus, StatusTracker};

use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::error::FailureKind;
use crate::remote::{Credential, CredentialProvider, FileService, FileUpload};

/// Fixed user-facing text for a failed upload attempt.
pub const UPLOAD_ERROR_MESSAGE: &str = "Error uploading file - please try again or contact admin.";

/// Orchestrates the per-user upload/list/delete lifecycle.
///
/// Every operation acquires a fresh credential, runs at most one chain of
/// remote calls, and folds the result back into [`ManagerState`]. Failures
/// are logged and surfaced as state, never returned to the caller. The state
/// lock is never held across an await, so independent operations (e.g.
/// deletions of distinct filenames) may be in flight concurrently.
pub struct UploadManager<S, C> {
    service: S,
    credentials: C,
    state: Mutex<ManagerState>,
}

impl<S: FileService, C: CredentialProvider> UploadManager<S, C> {
    pub fn new(service: S, credentials: C) -> Self {
        Self {
            service,
            credentials,
            state: Mutex::new(ManagerState::default()),
        }
    }

    /// Current state, cloned for the presentation layer.
    pub async fn snapshot(&self) -> ManagerState {
        self.state.lock().await.clone()
    }

    /// Toggle the management surface. Opening re-checks access and refreshes
    /// the file list; closing touches nothing else.
    pub async fn open_management_surface(&self) {
        let opened = {
            let mut state = self.state.lock().await;
            state.surface_visible = !state.surface_visible;
            if state.surface_visible {
                state.loading = true;
            }
            state.surface_visible
        };
        if !opened {
            return;
        }

        let Some(credential) = self.credentials.credential().await else {
            error!("no credential available, cannot load uploaded files");
            self.state.lock().await.loading = false;
            return;
        };

        let (config, ()) = tokio::join!(
            self.service.access_config(&credential),
            self.refresh_file_list(&credential),
        );

        let mut state = self.state.lock().await;
        match config {
            Ok(config) => state.management_access = config.has_management_access,
            Err(e) => {
                warn!("failed to fetch access config: {e}");
                state.management_access = false;
            }
        }
    }

    /// Re-fetch the authoritative file list, replacing the file set and
    /// resetting every per-filename deletion status. A failed fetch leaves
    /// an empty list; the failure is only distinguishable in the logs.
    pub async fn refresh_file_list(&self, credential: &Credential) {
        let result = self.service.list_files(credential).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(files) => {
                debug!(count = files.len(), "refreshed uploaded file list");
                state.files = files;
            }
            Err(e) => {
                warn!("failed to list uploaded files: {e}");
                state.files.clear();
            }
        }
        state.deletion.clear();
        state.loading = false;
    }

    /// Submit the first file of a selection. An empty selection is a no-op,
    /// as is a file the picker filter does not accept; a call while another
    /// upload is in flight is rejected without touching state.
    pub async fn upload_file(&self, mut selection: Vec<FileUpload>) {
        if selection.is_empty() {
            return;
        }
        let file = selection.remove(0);
        if !file.is_accepted() {
            warn!(filename = %file.filename, "file type not accepted, ignoring selection");
            return;
        }

        {
            let mut state = self.state.lock().await;
            if state.uploading {
                warn!(filename = %file.filename, "upload already in flight, ignoring");
                return;
            }
            state.uploading = true;
        }

        let Some(credential) = self.credentials.credential().await else {
            error!(filename = %file.filename, "no credential available for upload");
            let mut state = self.state.lock().await;
            state.uploading = false;
            state.upload_outcome = Some(UploadOutcome::Error {
                kind: FailureKind::Unauthenticated,
                message: UPLOAD_ERROR_MESSAGE.to_string(),
            });
            return;
        };

        let filename = file.filename.clone();
        match self.service.upload_file(file, &credential).await {
            Ok(receipt) => {
                debug!(filename = %filename, "upload accepted");
                {
                    let mut state = self.state.lock().await;
                    state.uploading = false;
                    state.upload_outcome = Some(UploadOutcome::Success(receipt.message));
                }
                // Sequenced after the upload so the refreshed list reflects it.
                self.refresh_file_list(&credential).await;
            }
            Err(e) => {
                warn!(filename = %filename, "upload failed: {e}");
                let mut state = self.state.lock().await;
                state.uploading = false;
                state.upload_outcome = Some(UploadOutcome::Error {
                    kind: FailureKind::Remote,
                    message: UPLOAD_ERROR_MESSAGE.to_string(),
                });
            }
        }
    }

    /// Request deletion of a listed file. Refuses filenames whose deletion
    /// is already pending or confirmed; a list refresh resets eligibility.
    pub async fn remove_file(&self, filename: &str) {
        {
            let mut state = self.state.lock().await;
            if state.deletion.blocks_delete(filename) {
                warn!(filename, "deletion already in flight or confirmed, ignoring");
                return;
            }
            state.deletion.set(filename, DeletionStatus::Pending);
        }

        let Some(credential) = self.credentials.credential().await else {
            error!(filename, "no credential available for deletion");
            self.state
                .lock()
                .await
                .deletion
                .set(filename, DeletionStatus::Error(FailureKind::Unauthenticated));
            return;
        };

        match self.service.delete_file(filename, &credential).await {
            Ok(()) => {
                debug!(filename, "deletion confirmed");
                self.state
                    .lock()
                    .await
                    .deletion
                    .set(filename, DeletionStatus::Success);
                // The refresh clears the whole status map, so the success
                // status is visible only until the new list lands.
                self.refresh_file_list(&credential).await;
            }
            Err(e) => {
                warn!(filename, "deletion failed: {e}");
                self.state
                    .lock()
                    .await
                    .deletion
                    .set(filename, DeletionStatus::Error(FailureKind::Remote));
            }
        }
    }
}
