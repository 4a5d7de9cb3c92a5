use std::collections::HashMap;

use crate::error::FailureKind;

/// Deletion progress for a single filename.
///
/// A filename with no entry in the tracker is "absent": no deletion was ever
/// requested, or the status was reset by a list refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionStatus {
    Pending,
    Success,
    Error(FailureKind),
}

/// Keyed state machine recording per-filename deletion progress.
///
/// Updates are keyed, not positional: concurrent deletions of distinct
/// filenames never interfere with each other's status.
#[derive(Debug, Clone, Default)]
pub struct StatusTracker {
    statuses: HashMap<String, DeletionStatus>,
}

impl StatusTracker {
    pub fn set(&mut self, filename: &str, status: DeletionStatus) {
        self.statuses.insert(filename.to_string(), status);
    }

    pub fn get(&self, filename: &str) -> Option<DeletionStatus> {
        self.statuses.get(filename).copied()
    }

    /// A pending or confirmed deletion blocks further delete requests for
    /// that filename until a list refresh resets it.
    pub fn blocks_delete(&self, filename: &str) -> bool {
        matches!(
            self.get(filename),
            Some(DeletionStatus::Pending | DeletionStatus::Success)
        )
    }

    /// Invoked on every list refresh; stale statuses must not outlive the
    /// filename set they describe.
    pub fn clear(&mut self) {
        self.statuses.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
