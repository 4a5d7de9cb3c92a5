use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde_json::json;

use super::{AccessConfig, Credential, CredentialProvider, FileService, FileUpload, UploadReceipt};
use crate::error::ServiceError;

/// HTTP binding for the remote file API.
#[derive(Clone)]
pub struct HttpFileService {
    client: Client,
    base_url: String,
}

impl HttpFileService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured client, e.g. one with a request timeout.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn check_status(response: Response) -> Result<Response, ServiceError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ServiceError::Unauthorized),
        status => Err(ServiceError::Rejected(status)),
    }
}

#[async_trait]
impl FileService for HttpFileService {
    async fn access_config(&self, credential: &Credential) -> Result<AccessConfig, ServiceError> {
        let response = self
            .client
            .get(self.url("config"))
            .bearer_auth(credential.token())
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn list_files(&self, credential: &Credential) -> Result<Vec<String>, ServiceError> {
        let response = self
            .client
            .get(self.url("list_uploaded"))
            .bearer_auth(credential.token())
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn upload_file(
        &self,
        file: FileUpload,
        credential: &Credential,
    ) -> Result<UploadReceipt, ServiceError> {
        let part = Part::bytes(file.bytes).file_name(file.filename);
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("upload"))
            .bearer_auth(credential.token())
            .multipart(form)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn delete_file(
        &self,
        filename: &str,
        credential: &Credential,
    ) -> Result<(), ServiceError> {
        let response = self
            .client
            .post(self.url("delete_uploaded"))
            .bearer_auth(credential.token())
            .json(&json!({ "filename": filename }))
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }
}

/// Credential provider backed by a fixed token. Useful for host applications
/// that refresh the token themselves, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    token: Option<String>,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn unauthenticated() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn credential(&self) -> Option<Credential> {
        self.token.as_deref().map(Credential::new)
    }
}
