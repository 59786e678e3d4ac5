//! # dfslib
//!
//! Rust client library for a simple distributed file store (DFS) server.
//!
//! ## Features
//!
//! - **Listing**: fetch the server's file names and render them as download
//!   links into a [`ListView`], in the order the server returned them.
//! - **Uploads**: send a selected file as a multipart form, then refresh the
//!   list so the new file shows up.
//! - **Replication**: push a file's content to peer servers.
//! - **Consistent views**: every refresh is sequenced, so a slow response
//!   never overwrites a newer listing, and failures are shown in the view
//!   instead of being dropped.
//!
//! The server itself is an external collaborator. The client relies on:
//!
//! - `GET /api/files` returning a JSON array of file names
//! - `GET /api/download?file=<name>` as a link target
//! - `POST /api/upload` accepting a multipart form with a `file` field
//! - `POST /api/replicate?file=<name>` accepting a raw body
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use dfslib::{ListView, PendingUpload, Store};
//!
//! # async fn example() -> dfslib::Result<()> {
//! let store = Store::connect("http://localhost:9090")?;
//! let view = ListView::new();
//!
//! // Initial listing
//! store.refresh_list(&view).await?;
//! print!("{}", view.render_text());
//!
//! // Upload a file; the list is refreshed afterwards
//! let selected = PendingUpload::from_path("report.pdf").await?;
//! store.upload_selected(Some(selected), &view).await?;
//! print!("{}", view.render_html());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fs;
pub mod http;
pub mod store;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::{ClientConfig, RefreshPolicy};
pub use error::{DfsError, Result};
pub use fs::{FileName, PendingUpload, RefreshOutcome, UploadOutcome};
pub use http::{HttpClient, HttpResponse, Transport};
pub use store::Store;
pub use view::{Entry, ListView, Ticket, ViewState};
