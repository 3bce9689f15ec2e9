//! Error types for the hotel booking backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HotelierError {
    #[error("Authentication required: {reason}")]
    Unauthenticated { reason: String },

    #[error("Access denied: {reason}")]
    Forbidden { reason: String },

    /// Returned both for absent rows and for rows owned by another hotel.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HotelierError {
    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self::Unauthenticated {
            reason: reason.into(),
        }
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Stable machine-readable code surfaced at the API boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Conflict { .. } => "CONFLICT",
            Self::Database(_) | Self::Cache(_) | Self::Serialization(_) | Self::Internal(_) => {
                "INTERNAL_ERROR"
            }
        }
    }
}

impl From<serde_json::Error> for HotelierError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type HotelierResult<T> = Result<T, HotelierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(HotelierError::unauthenticated("x").code(), "UNAUTHENTICATED");
        assert_eq!(HotelierError::forbidden("x").code(), "FORBIDDEN");
        assert_eq!(HotelierError::not_found("Booking", 1).code(), "NOT_FOUND");
        assert_eq!(HotelierError::bad_request("x").code(), "BAD_REQUEST");
        assert_eq!(HotelierError::conflict("x").code(), "CONFLICT");
        assert_eq!(
            HotelierError::Database("down".into()).code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn not_found_message_names_entity() {
        let err = HotelierError::not_found("Booking", "abc");
        assert_eq!(err.to_string(), "Booking not found: abc");
    }
}
