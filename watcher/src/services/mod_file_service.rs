//! Mod file persistence.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::mod_file::{ModFile, NewModFile};

/// Destination for newly recorded mod files
#[async_trait]
pub trait ModFileStore: Send + Sync {
    /// Insert a record and return the id assigned to it.
    async fn insert(&self, file: &NewModFile) -> Result<Uuid>;
}

/// PostgreSQL-backed mod file store (`mod_files` table).
pub struct PgModFileStore {
    db: PgPool,
}

impl PgModFileStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// All recorded files of a mod, newest first.
    pub async fn find_by_mod(&self, mod_id: &str) -> Result<Vec<ModFile>> {
        let files: Vec<ModFile> = sqlx::query_as(
            r#"
            SELECT id, file_name, file_size, mod_id, upload_date, maven_path, md5_hash,
                   site_downloads, platform_version, platform_version_group,
                   platform_version_parts, platform_versions, artifact_version,
                   artifact_version_parts, curseforge_downloads, modrinth_downloads
            FROM mod_files
            WHERE mod_id = $1
            ORDER BY upload_date DESC
            "#,
        )
        .bind(mod_id)
        .fetch_all(&self.db)
        .await?;

        Ok(files)
    }
}

#[async_trait]
impl ModFileStore for PgModFileStore {
    async fn insert(&self, file: &NewModFile) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO mod_files (
                file_name, file_size, mod_id, upload_date, maven_path, md5_hash,
                site_downloads, platform_version, platform_version_group,
                platform_version_parts, platform_versions, artifact_version,
                artifact_version_parts, curseforge_downloads, modrinth_downloads
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id
            "#,
        )
        .bind(&file.file_name)
        .bind(file.file_size)
        .bind(&file.mod_id)
        .bind(file.upload_date)
        .bind(&file.maven_path)
        .bind(&file.md5_hash)
        .bind(file.site_downloads)
        .bind(&file.platform_version)
        .bind(&file.platform_version_group)
        .bind(Json(file.platform_version_parts))
        .bind(&file.platform_versions)
        .bind(&file.artifact_version)
        .bind(Json(file.artifact_version_parts))
        .bind(file.curseforge_downloads)
        .bind(file.modrinth_downloads)
        .fetch_one(&self.db)
        .await?;

        Ok(id)
    }
}
