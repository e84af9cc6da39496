//! Artifact lookup against the host repository's storage.

pub mod filesystem;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

/// Details the host reports for a stored file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileDetails {
    pub content_length: u64,
}

/// Read access to files hosted by the repository server
#[async_trait]
pub trait ArtifactLookup: Send + Sync {
    /// Fetch details and content of `path` in `repository`.
    ///
    /// Returns `Ok(None)` when there is no such file.
    async fn find_file(&self, repository: &str, path: &str) -> Result<Option<(FileDetails, Bytes)>>;
}
