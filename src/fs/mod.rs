//! File names, selections and store operations.

pub(crate) mod file;
mod operations;

pub use file::{FileName, PendingUpload};
pub use operations::{RefreshOutcome, UploadOutcome};
