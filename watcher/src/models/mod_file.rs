//! Mod file model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Numeric breakdown of a dotted version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionParts {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// A mod file ready to be recorded; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewModFile {
    pub file_name: String,
    pub file_size: i64,
    pub mod_id: String,
    pub upload_date: DateTime<Utc>,
    pub maven_path: String,
    pub md5_hash: String,
    pub site_downloads: i64,
    pub platform_version: String,
    pub platform_version_group: String,
    pub platform_version_parts: VersionParts,
    pub platform_versions: Vec<String>,
    pub artifact_version: String,
    pub artifact_version_parts: VersionParts,
    pub curseforge_downloads: i64,
    pub modrinth_downloads: i64,
}

impl NewModFile {
    /// Attach the id assigned by the store.
    pub fn with_id(self, id: Uuid) -> ModFile {
        ModFile {
            id,
            file_name: self.file_name,
            file_size: self.file_size,
            mod_id: self.mod_id,
            upload_date: self.upload_date,
            maven_path: self.maven_path,
            md5_hash: self.md5_hash,
            site_downloads: self.site_downloads,
            platform_version: self.platform_version,
            platform_version_group: self.platform_version_group,
            platform_version_parts: self.platform_version_parts,
            platform_versions: self.platform_versions,
            artifact_version: self.artifact_version,
            artifact_version_parts: self.artifact_version_parts,
            curseforge_downloads: self.curseforge_downloads,
            modrinth_downloads: self.modrinth_downloads,
        }
    }
}

/// Mod file entity
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ModFile {
    pub id: Uuid,
    pub file_name: String,
    pub file_size: i64,
    pub mod_id: String,
    pub upload_date: DateTime<Utc>,
    pub maven_path: String,
    pub md5_hash: String,
    pub site_downloads: i64,
    pub platform_version: String,
    pub platform_version_group: String,
    #[sqlx(json)]
    pub platform_version_parts: VersionParts,
    pub platform_versions: Vec<String>,
    pub artifact_version: String,
    #[sqlx(json)]
    pub artifact_version_parts: VersionParts,
    pub curseforge_downloads: i64,
    pub modrinth_downloads: i64,
}
