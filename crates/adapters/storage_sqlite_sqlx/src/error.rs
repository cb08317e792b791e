//! Storage-specific error type wrapping sqlx errors.

use bayanchor_domain::error::BayanchorError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to (de)serialize a stored JSON payload.
    #[error("JSON payload error")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for BayanchorError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
