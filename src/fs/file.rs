//! File names and pending uploads.

use crate::error::{DfsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Opaque name of a file held by the server.
///
/// The client never validates or reorders names; they are kept exactly as the
/// server listed them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A file the user selected for upload.
///
/// Consumed by the upload call; nothing keeps it afterwards.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    /// Name sent as the multipart file name
    pub name: String,
    /// Raw file content
    pub content: Vec<u8>,
}

impl PendingUpload {
    /// Select in-memory content under the given name.
    pub fn from_bytes(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Select a local file, named after its final path component.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .ok_or_else(|| DfsError::Custom(format!("Invalid file path: {}", path.display())))?
            .to_string_lossy()
            .to_string();
        let content = tokio::fs::read(path).await?;
        Ok(Self { name, content })
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
