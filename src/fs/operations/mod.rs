//! Store operations split into focused modules.

mod list;
mod replicate;
mod upload;

pub use list::RefreshOutcome;
pub use upload::UploadOutcome;
