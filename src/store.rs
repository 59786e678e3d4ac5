//! Client handle for one DFS server.

use crate::api::ApiClient;
use crate::config::{ClientConfig, RefreshPolicy};
use crate::error::Result;
use crate::http::Transport;
use std::sync::Arc;

/// Client for a DFS server.
///
/// Holds no file state of its own: every listing is rendered into a
/// caller-supplied [`crate::ListView`]. Operations live in
/// `fs::operations`.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) api: ApiClient,
    pub(crate) refresh_policy: RefreshPolicy,
}

impl Store {
    /// Create a store from configuration, using the reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(&config)?,
            refresh_policy: config.refresh_policy,
        })
    }

    /// Create a store for `server_url` with default settings.
    pub fn connect(server_url: &str) -> Result<Self> {
        Self::new(ClientConfig::new(server_url)?)
    }

    /// Create a store over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            api: ApiClient::with_transport(&config, transport),
            refresh_policy: config.refresh_policy,
        }
    }

    /// The underlying API client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn refresh_policy(&self) -> RefreshPolicy {
        self.refresh_policy
    }

    pub fn set_refresh_policy(&mut self, policy: RefreshPolicy) {
        self.refresh_policy = policy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect() {
        let store = Store::connect("http://localhost:9090").unwrap();
        assert_eq!(store.api().base_url().as_str(), "http://localhost:9090/");
        assert_eq!(store.refresh_policy(), RefreshPolicy::Always);
    }

    #[test]
    fn test_connect_invalid_url() {
        assert!(Store::connect("localhost").is_err());
    }

    #[test]
    fn test_policy_from_config() {
        let config = ClientConfig::new("http://localhost:9090")
            .unwrap()
            .with_refresh_policy(RefreshPolicy::OnSuccess);
        let mut store = Store::new(config).unwrap();
        assert_eq!(store.refresh_policy(), RefreshPolicy::OnSuccess);
        store.set_refresh_policy(RefreshPolicy::Always);
        assert_eq!(store.refresh_policy(), RefreshPolicy::Always);
    }
}
