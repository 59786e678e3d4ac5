//! HTTP transport for DFS server requests.

use crate::error::{DfsError, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use url::Url;

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response from a status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// One file carried in a multipart form.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name
    pub field: String,
    /// File name reported to the server
    pub file_name: String,
    /// Raw file content
    pub content: Vec<u8>,
}

/// The requests the client needs from a transport.
///
/// Implementations must not interpret status codes; callers decide what a
/// given status means for their operation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request.
    async fn get(&self, url: &Url) -> Result<HttpResponse>;

    /// POST a multipart form containing a single file part.
    async fn post_form(&self, url: &Url, part: FilePart) -> Result<HttpResponse>;

    /// POST a raw body with the given content type.
    async fn post_bytes(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new HTTP client with a proxy.
    pub fn with_proxy(proxy: &str) -> Result<Self> {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| DfsError::Custom(format!("Invalid proxy: {}", e)))?;

        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| DfsError::Custom(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    async fn finish(response: reqwest::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        let response = self.client.get(url.clone()).send().await?;
        Self::finish(response).await
    }

    async fn post_form(&self, url: &Url, part: FilePart) -> Result<HttpResponse> {
        let form = Form::new().part(
            part.field,
            Part::bytes(part.content).file_name(part.file_name),
        );
        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await?;
        Self::finish(response).await
    }

    async fn post_bytes(
        &self,
        url: &Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url.clone())
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await?;
        Self::finish(response).await
    }
}
