//! Mod jar path resolution.
//!
//! Deployed mod jars live at `<group...>/<mod_id>/<file_name>` where the file
//! name is `<name>-<platform version>-<mod version>.jar`, for example
//! `com/blakesmods/examplemod/examplemod-1.20.1-2.3.4.jar`.

use crate::error::{AppError, Result};

/// Fields derived from a deployed jar's repository path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub file_name: String,
    pub mod_id: String,
    /// Repository-relative path with a leading slash
    pub maven_path: String,
    pub platform_version: String,
    /// First two components of the platform version, e.g. `1.20`
    pub platform_version_group: String,
    pub artifact_version: String,
}

/// Resolve a repository-relative jar path into its [`FileInfo`].
///
/// A leading `/` is ignored, so an already prefixed path resolves to the same
/// `maven_path`.
pub fn resolve_file_info(path: &str) -> Result<FileInfo> {
    let path = path.trim_start_matches('/');
    let parts: Vec<&str> = path.split('/').collect();

    if parts.len() < 3 {
        return Err(AppError::Validation(format!(
            "Invalid mod path {:?}: expected group/.../mod_id/file_name",
            path
        )));
    }

    let file_name = parts[parts.len() - 1];
    let mod_id = parts[2];
    if file_name.is_empty() || mod_id.is_empty() {
        return Err(AppError::Validation(format!(
            "Invalid mod path {:?}: empty mod id or file name",
            path
        )));
    }

    let file_name_parts: Vec<&str> = file_name.split('-').collect();
    if file_name_parts.len() < 3 {
        return Err(AppError::Validation(format!(
            "Invalid mod file name {:?}: expected name-platformVersion-modVersion.jar",
            file_name
        )));
    }

    let platform_version = file_name_parts[1];
    let platform_version_group = version_group(platform_version).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid platform version {:?} in {:?}: expected at least major.minor",
            platform_version, file_name
        ))
    })?;

    let artifact_version = file_name_parts[2];
    let artifact_version = artifact_version
        .strip_suffix(".jar")
        .unwrap_or(artifact_version);

    Ok(FileInfo {
        file_name: file_name.to_string(),
        mod_id: mod_id.to_string(),
        maven_path: format!("/{}", path),
        platform_version: platform_version.to_string(),
        platform_version_group,
        artifact_version: artifact_version.to_string(),
    })
}

/// `1.20.1` -> `1.20`; `None` when there is no minor component.
fn version_group(version: &str) -> Option<String> {
    let mut components = version.split('.');
    let major = components.next()?;
    let minor = components.next()?;
    Some(format!("{}.{}", major, minor))
}
