//! DFS API client with request/response handling.

use super::encode::encode_component;
use crate::config::ClientConfig;
use crate::error::{DfsError, Result};
use crate::fs::{FileName, PendingUpload};
use crate::http::{FilePart, HttpClient, HttpResponse, Transport};
use log::{debug, warn};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Listing endpoint, relative to the server URL.
pub const FILES_PATH: &str = "api/files";
/// Download endpoint, used only as a link target.
pub const DOWNLOAD_PATH: &str = "api/download";
/// Upload endpoint.
pub const UPLOAD_PATH: &str = "api/upload";
/// Server-to-server replication endpoint.
pub const REPLICATE_PATH: &str = "api/replicate";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";
/// Query parameter naming the file for download and replication.
pub const FILE_PARAM: &str = "file";

/// DFS API client bound to one server.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base: Url,
    timeout: Option<Duration>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a reqwest-backed client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = match &config.proxy {
            Some(proxy) => HttpClient::with_proxy(proxy)?,
            None => HttpClient::new(),
        };
        Ok(Self {
            transport: Arc::new(http),
            base: config.server_url.clone(),
            timeout: config.timeout,
        })
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base: config.server_url.clone(),
            timeout: config.timeout,
        }
    }

    /// Same transport and timeout, pointed at another server.
    pub fn for_server(&self, base: Url) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base,
            timeout: self.timeout,
        }
    }

    /// Base URL of the server.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    fn endpoint_for_file(&self, path: &str, name: &FileName) -> Result<Url> {
        let mut url = self.endpoint(path)?;
        url.set_query(Some(&format!(
            "{}={}",
            FILE_PARAM,
            encode_component(name.as_str())
        )));
        Ok(url)
    }

    /// Link target that downloads `name`.
    ///
    /// The name is escaped so reserved characters survive the round trip.
    pub fn download_url(&self, name: &FileName) -> Result<Url> {
        self.endpoint_for_file(DOWNLOAD_PATH, name)
    }

    async fn send(
        &self,
        action: &str,
        request: impl Future<Output = Result<HttpResponse>>,
    ) -> Result<HttpResponse> {
        let response = match self.timeout {
            Some(limit) => timeout(limit, request)
                .await
                .map_err(|_| DfsError::Timeout)??,
            None => request.await?,
        };
        debug!(
            "api response a={} status={} bytes={}",
            action,
            response.status,
            response.body.len()
        );
        Ok(response)
    }

    /// Fetch the server's file names in the order the server returned them.
    pub async fn list_files(&self) -> Result<Vec<FileName>> {
        let url = self.endpoint(FILES_PATH)?;
        debug!("api request a=list url={}", url);
        let response = self.send("list", self.transport.get(&url)).await?;

        if !response.is_success() {
            return Err(DfsError::HttpError(response.status));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Send a file as a multipart form.
    ///
    /// The response is returned whatever its status; the caller decides what
    /// a failed upload means.
    pub async fn upload(&self, file: PendingUpload) -> Result<HttpResponse> {
        let url = self.endpoint(UPLOAD_PATH)?;
        debug!(
            "api request a=upload url={} file={} bytes={}",
            url,
            file.name,
            file.content.len()
        );
        let part = FilePart {
            field: UPLOAD_FIELD.to_string(),
            file_name: file.name,
            content: file.content,
        };
        let response = self.send("upload", self.transport.post_form(&url, part)).await?;
        if !response.is_success() {
            warn!(
                "upload answered with status {}: {}",
                response.status,
                response.text().trim()
            );
        }
        Ok(response)
    }

    /// Push raw content to this server's replication endpoint.
    ///
    /// Only `201 Created` counts as success.
    pub async fn replicate(&self, name: &FileName, content: Vec<u8>) -> Result<()> {
        let url = self.endpoint_for_file(REPLICATE_PATH, name)?;
        debug!("api request a=replicate url={} bytes={}", url, content.len());
        let response = self
            .send(
                "replicate",
                self.transport
                    .post_bytes(&url, "application/octet-stream", content),
            )
            .await?;

        if response.status != 201 {
            return Err(DfsError::Rejected {
                status: response.status,
                message: format!("replicate failed: {}", response.text().trim()),
            });
        }
        Ok(())
    }
}
