//! Database-specific error types and conversions.

use hotelier_core::error::HotelierError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Invalid stored value: {0}")]
    InvalidRow(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("{entity} with {field} '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },
}

impl DbError {
    /// Classify a failed write, surfacing a violation of `index` as
    /// [`DbError::Duplicate`].
    pub(crate) fn from_write(
        message: String,
        index: &str,
        entity: &str,
        field: &str,
        value: &str,
    ) -> Self {
        if message.contains(index) && message.contains("already contains") {
            DbError::Duplicate {
                entity: entity.into(),
                field: field.into(),
                value: value.into(),
            }
        } else {
            DbError::Query(message)
        }
    }
}

impl From<DbError> for HotelierError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => HotelierError::NotFound { entity, id },
            duplicate @ DbError::Duplicate { .. } => HotelierError::Conflict {
                message: duplicate.to_string(),
            },
            other => HotelierError::Database(other.to_string()),
        }
    }
}
