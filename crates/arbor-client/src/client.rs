//! Authenticated HTTP transport and typed response decoding

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::source::CourseSource;
use arbor_core::{CourseRecord, FileRecord, FolderRecord, Profile};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Thin authenticated wrapper over the remote REST API.
///
/// Stateless apart from the bearer credential, so one instance is
/// safely shared across concurrent fetch units.
pub struct CanvasClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CanvasClient {
    pub fn new(config: ClientConfig) -> Self {
        CanvasClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// Send one authorized GET and parse the body as JSON. A non-2xx
    /// status fails the request; there is no retry.
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.config.token))
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status, url });
        }

        let body =
            response
                .text()
                .await
                .map_err(|source| ClientError::Transport {
                    url: url.clone(),
                    source,
                })?;
        serde_json::from_str(&body)
            .map_err(|source| ClientError::Decode { url, source })
    }

    /// Fetch a list endpoint. The response as a whole must be a JSON
    /// array; individual elements are decoded tolerantly.
    async fn get_records<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>> {
        let json = self.get_json(path).await?;
        let items = serde_json::from_value::<Vec<Value>>(json).map_err(
            |source| ClientError::Decode {
                url: self.url(path),
                source,
            },
        )?;
        Ok(decode_each(items))
    }
}

#[async_trait]
impl CourseSource for CanvasClient {
    async fn profile(&self) -> Result<Profile> {
        let path = "/api/v1/users/self/profile";
        let json = self.get_json(path).await?;
        serde_json::from_value(json).map_err(|source| ClientError::Decode {
            url: self.url(path),
            source,
        })
    }

    async fn courses(&self) -> Result<Vec<CourseRecord>> {
        let path = format!(
            "/api/v1/users/self/courses?per_page={}",
            self.config.per_page
        );
        self.get_records(&path).await
    }

    async fn course_folders(&self, course_id: u64) -> Result<Vec<FolderRecord>> {
        let path = format!(
            "/api/v1/courses/{course_id}/folders?per_page={}",
            self.config.per_page
        );
        self.get_records(&path).await
    }

    async fn course_files(&self, course_id: u64) -> Result<Vec<FileRecord>> {
        let path = format!(
            "/api/v1/courses/{course_id}/files?per_page={}",
            self.config.per_page
        );
        self.get_records(&path).await
    }
}

/// Decode each element of a listing individually, dropping the ones
/// that do not match the expected record shape. Sandboxed or
/// permission-restricted entries are real on live instances and must
/// not block the rest of the listing.
pub fn decode_each<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::debug!(%err, "skipping malformed record");
                None
            }
        })
        .collect()
}
