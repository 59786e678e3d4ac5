//! Replication to peer servers.

use crate::config::parse_server_url;
use crate::error::Result;
use crate::fs::file::FileName;
use crate::store::Store;
use futures::future::join_all;
use log::{info, warn};
use std::path::Path;

impl Store {
    /// Push `content` to a peer's replicate endpoint under `name`.
    ///
    /// The peer must answer `201 Created`.
    pub async fn replicate(&self, peer: &str, name: &FileName, content: Vec<u8>) -> Result<()> {
        let peer_url = parse_server_url(peer)?;
        self.api.for_server(peer_url).replicate(name, content).await?;
        info!("replicated {} to {}", name, peer);
        Ok(())
    }

    /// Replicate a local file to a peer, keeping its file name.
    pub async fn replicate_file<P: AsRef<Path>>(&self, peer: &str, local_path: P) -> Result<()> {
        let file = crate::fs::PendingUpload::from_path(local_path).await?;
        self.replicate(peer, &FileName::new(file.name), file.content)
            .await
    }

    /// Replicate to every peer concurrently.
    ///
    /// Failures are logged and reported per peer; one peer failing does not
    /// stop the others.
    pub async fn replicate_to_peers(
        &self,
        peers: &[String],
        name: &FileName,
        content: &[u8],
    ) -> Vec<(String, Result<()>)> {
        let tasks = peers.iter().map(|peer| async move {
            let result = self.replicate(peer, name, content.to_vec()).await;
            if let Err(e) = &result {
                warn!("replicate to {} failed: {}", peer, e);
            }
            (peer.clone(), result)
        });
        join_all(tasks).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::REPLICATE_PATH;
    use crate::config::ClientConfig;
    use crate::error::DfsError;
    use crate::testing::{MockReply, MockTransport};
    use std::sync::Arc;
    use tempdir::TempDir;

    fn store(mock: &Arc<MockTransport>) -> Store {
        let config = ClientConfig::new("http://dfs.test:9090").unwrap();
        Store::with_transport(config, mock.clone())
    }

    #[tokio::test]
    async fn test_replicate_targets_peer() {
        let mock = Arc::new(MockTransport::new());
        mock.push("POST", REPLICATE_PATH, MockReply::respond(201, ""));

        store(&mock)
            .replicate("http://peer-b:9091", &FileName::from("a&b.txt"), b"xyz".to_vec())
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(
            requests[0].url.as_str(),
            "http://peer-b:9091/api/replicate?file=a%26b.txt"
        );
        assert_eq!(requests[0].body, b"xyz");
    }

    #[tokio::test]
    async fn test_replicate_invalid_peer() {
        let mock = Arc::new(MockTransport::new());
        let res = store(&mock)
            .replicate("peer-b", &FileName::from("x"), Vec::new())
            .await;
        assert!(matches!(res, Err(DfsError::InvalidUrl(_))));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_replicate_to_peers_reports_each() {
        let mock = Arc::new(MockTransport::new());
        mock.push("POST", REPLICATE_PATH, MockReply::respond(201, ""));
        mock.push("POST", REPLICATE_PATH, MockReply::Fail("no route to host".into()));
        let peers = vec!["http://peer-b:9091".to_string(), "http://peer-c:9092".to_string()];

        let results = store(&mock)
            .replicate_to_peers(&peers, &FileName::from("f.txt"), b"data")
            .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "http://peer-b:9091");
        assert_eq!(results[1].0, "http://peer-c:9092");
        let ok = results.iter().filter(|(_, r)| r.is_ok()).count();
        assert_eq!(ok, 1);
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_replicate_file() {
        let dir = TempDir::new("dfslib").unwrap();
        let path = dir.path().join("backup.tar");
        std::fs::write(&path, b"tar").unwrap();

        let mock = Arc::new(MockTransport::new());
        mock.push("POST", REPLICATE_PATH, MockReply::respond(409, "exists"));

        let res = store(&mock).replicate_file("http://peer-b:9091", &path).await;
        assert!(matches!(res, Err(DfsError::Rejected { status: 409, .. })));
        assert_eq!(
            mock.requests()[0].query.as_deref(),
            Some("file=backup.tar")
        );
    }
}
