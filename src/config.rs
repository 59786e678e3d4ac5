//! Client configuration.

use crate::error::{DfsError, Result};
use std::time::Duration;
use url::Url;

/// Server used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:9090";

/// Environment variable holding the server URL.
pub const ENV_SERVER_URL: &str = "DFS_SERVER_URL";
/// Environment variable holding an optional proxy URL.
pub const ENV_PROXY: &str = "DFS_PROXY";
/// Environment variable holding an optional request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "DFS_TIMEOUT_SECS";

/// Whether an upload refreshes the list after the server answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Refresh whatever status the upload returned.
    #[default]
    Always,
    /// Refresh only after a 2xx upload response.
    OnSuccess,
}

impl RefreshPolicy {
    /// Decide whether to refresh after an upload answered with `status`.
    pub fn should_refresh(self, status: u16) -> bool {
        match self {
            RefreshPolicy::Always => true,
            RefreshPolicy::OnSuccess => (200..300).contains(&status),
        }
    }
}

/// Settings for a [`crate::Store`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the DFS server, always ending in `/`
    pub server_url: Url,
    /// Optional HTTP proxy (e.g. "http://proxy:8080")
    pub proxy: Option<String>,
    /// Per-request timeout; `None` leaves it to the transport
    pub timeout: Option<Duration>,
    /// Refresh behavior after uploads
    pub refresh_policy: RefreshPolicy,
}

impl ClientConfig {
    /// Configuration for the given server with default settings.
    pub fn new(server_url: &str) -> Result<Self> {
        Ok(Self {
            server_url: parse_server_url(server_url)?,
            proxy: None,
            timeout: None,
            refresh_policy: RefreshPolicy::default(),
        })
    }

    /// Read `DFS_SERVER_URL`, `DFS_PROXY` and `DFS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], but `server_url` replaces
    /// `DFS_SERVER_URL`, which is then never read.
    pub fn from_env_with_server(server_url: &str) -> Result<Self> {
        Self::from_lookup(with_server(server_url, |key| std::env::var(key).ok()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server = lookup(ENV_SERVER_URL).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let mut config = Self::new(&server)?;
        config.proxy = lookup(ENV_PROXY).filter(|p| !p.is_empty());
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                DfsError::Custom(format!("Invalid {}: {}", ENV_TIMEOUT_SECS, secs))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Route requests through a proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Choose when uploads refresh the list.
    pub fn with_refresh_policy(mut self, policy: RefreshPolicy) -> Self {
        self.refresh_policy = policy;
        self
    }
}

fn with_server(
    server_url: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> impl Fn(&str) -> Option<String> {
    let server_url = server_url.to_string();
    move |key| {
        if key == ENV_SERVER_URL {
            Some(server_url.clone())
        } else {
            lookup(key)
        }
    }
}

/// Parse a server URL, accepting only http(s) and normalizing the path so
/// relative endpoint joins stay under it.
pub(crate) fn parse_server_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(DfsError::Custom(format!(
            "Unsupported URL scheme: {}",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
