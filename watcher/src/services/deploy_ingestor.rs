//! Deploy ingestion.
//!
//! Turns a deploy notification for a mod jar into a `mod_files` record:
//! resolve the path, fetch the jar from the repository, hash it and insert.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use md5::{Digest, Md5};

use crate::error::{AppError, Result};
use crate::formats::{parse_version, resolve_file_info, FileInfo};
use crate::models::mod_file::{ModFile, NewModFile};
use crate::services::event_bus::DeployEvent;
use crate::services::mod_file_service::ModFileStore;
use crate::storage::{ArtifactLookup, FileDetails};

/// What happened to a single deploy notification
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// A new record was stored
    Created(ModFile),
    /// API jars are not tracked as mod releases
    SkippedApiJar,
    /// Checksums, POMs, signatures and other non-jar files
    SkippedNotJar,
}

/// Stateless handler invoked once per deploy notification.
pub struct DeployIngestor {
    lookup: Arc<dyn ArtifactLookup>,
    store: Arc<dyn ModFileStore>,
}

impl DeployIngestor {
    pub fn new(lookup: Arc<dyn ArtifactLookup>, store: Arc<dyn ModFileStore>) -> Self {
        Self { lookup, store }
    }

    /// Record the deployed file if it is a mod jar.
    pub async fn on_deploy(&self, event: &DeployEvent) -> Result<IngestOutcome> {
        let gav = event.gav.as_str();

        if gav.ends_with("-api.jar") {
            tracing::info!(
                repository = %event.repository,
                path = gav,
                "Skipping jar {} as it's an API jar",
                gav
            );
            return Ok(IngestOutcome::SkippedApiJar);
        }

        if !gav.ends_with(".jar") {
            return Ok(IngestOutcome::SkippedNotJar);
        }

        let info = resolve_file_info(gav)?;

        let (details, content) = self
            .lookup
            .find_file(&event.repository, gav)
            .await?
            .ok_or_else(|| AppError::MissingArtifact {
                repository: event.repository.clone(),
                path: gav.to_string(),
            })?;

        let new_file = build_record(info, details, &content, Utc::now())?;
        let id = self.store.insert(&new_file).await?;
        let file = new_file.with_id(id);

        tracing::info!(
            id = %file.id,
            mod_id = %file.mod_id,
            path = %file.maven_path,
            "Created new mod file: {:?}",
            file
        );

        Ok(IngestOutcome::Created(file))
    }
}

/// Lowercase hex MD5 digest of `data`.
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

fn build_record(
    info: FileInfo,
    details: FileDetails,
    content: &[u8],
    upload_date: DateTime<Utc>,
) -> Result<NewModFile> {
    let file_size = i64::try_from(details.content_length).map_err(|_| {
        AppError::Storage(format!(
            "File {} reports an oversized length of {} bytes",
            info.maven_path, details.content_length
        ))
    })?;

    Ok(NewModFile {
        file_size,
        upload_date,
        md5_hash: md5_hex(content),
        site_downloads: 0,
        platform_version_parts: parse_version(&info.platform_version),
        platform_versions: vec![info.platform_version.clone()],
        artifact_version_parts: parse_version(&info.artifact_version),
        curseforge_downloads: 0,
        modrinth_downloads: 0,
        file_name: info.file_name,
        mod_id: info.mod_id,
        maven_path: info.maven_path,
        platform_version: info.platform_version,
        platform_version_group: info.platform_version_group,
        artifact_version: info.artifact_version,
    })
}
