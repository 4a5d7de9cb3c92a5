use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::{Mutex, Semaphore};

use upload_manager::{
    AccessConfig, Credential, FileService, FileUpload, ServiceError, UploadReceipt,
};

pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Scripted in-memory stand-in for the remote file service.
///
/// Clones share their interior state, so a test can keep a clone for
/// inspection after handing the service to a manager. `lists` holds the
/// successive results of `list_files`; the last entry keeps repeating.
/// `upload_results` scripts upload outcomes (`None` means failure). The
/// optional gates hold a call in flight until the test releases a permit.
#[derive(Clone, Default)]
pub struct MockService {
    pub has_access: bool,
    pub fail_list: Arc<AtomicBool>,
    pub fail_delete: bool,
    pub lists: Arc<Mutex<VecDeque<Vec<String>>>>,
    pub upload_results: Arc<Mutex<VecDeque<Option<String>>>>,
    pub delete_gate: Option<Arc<Semaphore>>,
    pub upload_gate: Option<Arc<Semaphore>>,
    pub list_calls: Arc<AtomicUsize>,
    pub upload_calls: Arc<AtomicUsize>,
    pub delete_calls: Arc<AtomicUsize>,
    pub deleted: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn with_lists(lists: Vec<Vec<String>>) -> Self {
        Self {
            has_access: true,
            lists: Arc::new(Mutex::new(lists.into_iter().collect())),
            ..Default::default()
        }
    }

    pub async fn script_uploads(&self, results: Vec<Option<&str>>) {
        let mut scripted = self.upload_results.lock().await;
        scripted.extend(results.into_iter().map(|r| r.map(str::to_string)));
    }
}

#[async_trait]
impl FileService for MockService {
    async fn access_config(&self, _credential: &Credential) -> Result<AccessConfig, ServiceError> {
        Ok(AccessConfig {
            has_management_access: self.has_access,
        })
    }

    async fn list_files(&self, _credential: &Credential) -> Result<Vec<String>, ServiceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ServiceError::Rejected(StatusCode::INTERNAL_SERVER_ERROR));
        }
        let mut lists = self.lists.lock().await;
        if lists.len() > 1 {
            Ok(lists.pop_front().expect("non-empty deque"))
        } else {
            Ok(lists.front().cloned().unwrap_or_default())
        }
    }

    async fn upload_file(
        &self,
        _file: FileUpload,
        _credential: &Credential,
    ) -> Result<UploadReceipt, ServiceError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.upload_gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        match self.upload_results.lock().await.pop_front().flatten() {
            Some(message) => Ok(UploadReceipt { message }),
            None => Err(ServiceError::Rejected(StatusCode::BAD_REQUEST)),
        }
    }

    async fn delete_file(
        &self,
        filename: &str,
        _credential: &Credential,
    ) -> Result<(), ServiceError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.delete_gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        if self.fail_delete {
            return Err(ServiceError::Rejected(StatusCode::INTERNAL_SERVER_ERROR));
        }
        self.deleted.lock().await.push(filename.to_string());
        Ok(())
    }
}
