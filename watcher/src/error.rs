//! Watcher error types and result alias.

use thiserror::Error;

/// Watcher result type alias
pub type Result<T> = std::result::Result<T, AppError>;

/// Watcher error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed artifact path or version string
    #[error("Validation error: {0}")]
    Validation(String),

    /// The repository reported a deploy but has no file at that path
    #[error("Failed to fetch details for file {path} in repository {repository}")]
    MissingArtifact { repository: String, path: String },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Short machine-readable code, used as a log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::MissingArtifact { .. } => "MISSING_ARTIFACT",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Migration(_) => "MIGRATION_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_message_names_path() {
        let err = AppError::MissingArtifact {
            repository: "releases".into(),
            path: "com/example/mod/mod-1.20.1-1.0.0.jar".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch details for file com/example/mod/mod-1.20.1-1.0.0.jar \
             in repository releases"
        );
        assert_eq!(err.code(), "MISSING_ARTIFACT");
    }
}
