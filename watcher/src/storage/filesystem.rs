//! Filesystem repository lookup.

use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use super::{ArtifactLookup, FileDetails};
use crate::error::{AppError, Result};

/// Repositories laid out on disk as `<base_path>/<repository>/<path>`
pub struct FilesystemRepository {
    base_path: PathBuf,
}

impl FilesystemRepository {
    /// Create new filesystem lookup
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Map a repository/path pair onto disk, rejecting anything that could
    /// escape the base directory.
    fn resolve(&self, repository: &str, path: &str) -> Result<PathBuf> {
        let mut full = self.base_path.clone();
        for part in [repository, path.trim_start_matches('/')] {
            for component in Path::new(part).components() {
                match component {
                    Component::Normal(segment) => full.push(segment),
                    Component::CurDir => {}
                    _ => {
                        return Err(AppError::Validation(format!(
                            "Invalid repository path: {}/{}",
                            repository, path
                        )))
                    }
                }
            }
        }
        Ok(full)
    }
}

#[async_trait]
impl ArtifactLookup for FilesystemRepository {
    async fn find_file(
        &self,
        repository: &str,
        path: &str,
    ) -> Result<Option<(FileDetails, Bytes)>> {
        let full = self.resolve(repository, path)?;

        let content = match fs::read(&full).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}/{}: {}",
                    repository, path, e
                )))
            }
        };

        let details = FileDetails {
            content_length: content.len() as u64,
        };
        Ok(Some((details, Bytes::from(content))))
    }
}
