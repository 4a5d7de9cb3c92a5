use reqwest::StatusCode;
use thiserror::Error;

/// Failure reported by the remote file service boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unauthorized")]
    Unauthorized,
    #[error("request rejected with status {0}")]
    Rejected(StatusCode),
}

/// Why a user-level operation failed.
///
/// A missing credential and a rejected remote call are distinct here so the
/// presentation layer can prompt a re-login instead of offering a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No usable credential could be obtained for the current session.
    Unauthenticated,
    /// The remote call failed or was rejected.
    Remote,
}
