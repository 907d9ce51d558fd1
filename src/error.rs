// src/error.rs

use std::fmt;

/// Store Error Enum.
/// Every create/read/update/delete operation surfaces its failure through
/// this taxonomy; nothing is swallowed and nothing is retried at this layer.
#[derive(Debug)]
pub enum DataError {
    // Missing required field, malformed value, out-of-range value
    Validation(String),

    // Duplicate value for a unique field (e.g. users.email)
    UniquenessConflict(String),

    // Identifier did not resolve: direct read/update/delete, or a
    // foreign-key reference at write time
    NotFound(String),

    // Delete blocked by live dependent records (restrict policy)
    ReferentialIntegrity(String),

    // Transient store failure (connection, timeout, protocol). Reads are
    // safe to retry; writes are not without deduplication.
    StoreUnavailable(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Validation(msg) => write!(f, "validation failed: {}", msg),
            DataError::UniquenessConflict(msg) => write!(f, "uniqueness conflict: {}", msg),
            DataError::NotFound(msg) => write!(f, "not found: {}", msg),
            DataError::ReferentialIntegrity(msg) => {
                write!(f, "referential integrity violation: {}", msg)
            }
            DataError::StoreUnavailable(msg) => write!(f, "store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for DataError {}

/// Converts `sqlx::Error` into the taxonomy.
/// Allows using `?` operator on store queries.
impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DataError::NotFound("record not found".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DataError::UniquenessConflict(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                DataError::ReferentialIntegrity(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_check_violation() => {
                DataError::Validation(db.message().to_string())
            }
            other => DataError::StoreUnavailable(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for DataError {
    fn from(err: validator::ValidationErrors) -> Self {
        DataError::Validation(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for DataError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DataError::StoreUnavailable(err.to_string())
    }
}
