//! Object storage adapter
//!
//! Implements `DocumentStorePort` against the provider's storage REST API.
//! Objects are written under a caller-generated name inside a fixed bucket;
//! the returned path is what gets recorded on the claim row.

use async_trait::async_trait;
use tracing::debug;

use domain_claims::{ClaimError, DocumentStorePort};

use crate::error::ProviderError;

/// Configuration for the hosted storage API
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Base URL of the provider project
    pub base_url: String,
    /// Project API key sent with every request
    pub api_key: String,
    /// Bucket holding claim documents
    pub bucket: String,
}

impl StorageConfig {
    /// The bucket claim documents are uploaded into by default
    pub const DEFAULT_BUCKET: &'static str = "claim-documents";
}

/// REST client for the provider's object storage
#[derive(Debug, Clone)]
pub struct RestObjectStore {
    http: reqwest::Client,
    config: StorageConfig,
}

impl RestObjectStore {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn object_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.bucket,
            object_name
        )
    }
}

#[async_trait]
impl DocumentStorePort for RestObjectStore {
    async fn upload(&self, object_name: &str, bytes: Vec<u8>) -> Result<String, ClaimError> {
        let response = self
            .http
            .post(self.object_url(object_name))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .body(bytes)
            .send()
            .await
            .map_err(|e| ProviderError::from(e).into_upload())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClaimError::upload(format!(
                "storage returned {status}: {body}"
            )));
        }

        let path = format!("{}/{}", self.config.bucket, object_name);
        debug!(%path, "Uploaded claim document");
        Ok(path)
    }
}
