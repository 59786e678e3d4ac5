//! Upload operations.

use super::list::RefreshOutcome;
use crate::error::{DfsError, Result};
use crate::fs::file::{FileName, PendingUpload};
use crate::store::Store;
use crate::view::ListView;
use log::{debug, info};
use std::path::Path;

/// What an upload call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file was selected; nothing was sent.
    NothingSelected,
    /// The file reached the server.
    Sent {
        /// Name the file was sent under
        file: FileName,
        /// Status the upload answered with
        status: u16,
        /// Result of the follow-up refresh, `None` if the policy skipped it
        refresh: Option<RefreshOutcome>,
    },
}

impl Store {
    /// Upload the selected file, then refresh `view`.
    ///
    /// With no selection this returns immediately without touching the
    /// network or the view. Once the server has answered, the list is
    /// refreshed according to the store's [`crate::RefreshPolicy`]. A transport
    /// failure on the upload itself is returned without refreshing; a failed
    /// refresh after the server answered comes back as
    /// [`DfsError::RefreshAfterUpload`] carrying the upload status.
    pub async fn upload_selected(
        &self,
        selection: Option<PendingUpload>,
        view: &ListView,
    ) -> Result<UploadOutcome> {
        let Some(file) = selection else {
            debug!("upload skipped: no file selected");
            return Ok(UploadOutcome::NothingSelected);
        };

        let name = FileName::new(file.name.clone());
        let response = self.api.upload(file).await?;
        info!("uploaded {} (status {})", name, response.status);

        let refresh = if self.refresh_policy.should_refresh(response.status) {
            match self.refresh_list(view).await {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    return Err(DfsError::RefreshAfterUpload {
                        file: name.into_inner(),
                        status: response.status,
                        source: Box::new(e),
                    });
                }
            }
        } else {
            debug!(
                "refresh skipped after upload of {} (status {})",
                name, response.status
            );
            None
        };

        Ok(UploadOutcome::Sent {
            file: name,
            status: response.status,
            refresh,
        })
    }

    /// Upload a local file, then refresh `view`.
    pub async fn upload_path<P: AsRef<Path>>(
        &self,
        local_path: P,
        view: &ListView,
    ) -> Result<UploadOutcome> {
        let file = PendingUpload::from_path(local_path).await?;
        self.upload_selected(Some(file), view).await
    }
}
