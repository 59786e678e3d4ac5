//! Listing: fetch the server's files and render them.

use crate::error::Result;
use crate::store::Store;
use crate::view::{Entry, ListView};
use log::{debug, warn};

/// Result of a refresh that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The listing replaced the view.
    Applied { entries: usize },
    /// A newer refresh had already landed; this one was dropped.
    Stale,
}

impl Store {
    /// Fetch the current file list and replace `view` with it.
    ///
    /// Entries keep the server's order and link to the download endpoint.
    /// On failure the view shows the error (unless a newer refresh already
    /// landed) and the error is returned.
    pub async fn refresh_list(&self, view: &ListView) -> Result<RefreshOutcome> {
        let ticket = view.begin_refresh();
        debug!("refresh #{} started", ticket.value());

        let entries = match self.fetch_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                if view.fail(ticket, e.to_string()) {
                    warn!("refresh #{} failed: {}", ticket.value(), e);
                } else {
                    debug!("refresh #{} failed after a newer refresh: {}", ticket.value(), e);
                }
                return Err(e);
            }
        };

        let count = entries.len();
        if view.apply(ticket, entries) {
            debug!("refresh #{} applied {} entries", ticket.value(), count);
            Ok(RefreshOutcome::Applied { entries: count })
        } else {
            debug!("refresh #{} discarded as stale", ticket.value());
            Ok(RefreshOutcome::Stale)
        }
    }

    async fn fetch_entries(&self) -> Result<Vec<Entry>> {
        self.api
            .list_files()
            .await?
            .into_iter()
            .map(|name| -> Result<Entry> {
                let href = self.api.download_url(&name)?.to_string();
                Ok(Entry { name, href })
            })
            .collect()
    }
}
