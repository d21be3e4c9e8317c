//! # API Error Type
//!
//! Unified error type returned by form commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  F1 (Add)                                                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command handler → CommandResult = Result<Outcome, ApiError>     │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Entry invalid? ── ValidationError::Required("price") ──┐       │  │
//! │  │         │                                                │       │  │
//! │  │         ▼                                                ▼       │  │
//! │  │  Store failed?  ── DbError::QueryFailed("...") ──────► ApiError  │  │
//! │  │         │                                                │       │  │
//! │  │         ▼                                                │       │  │
//! │  │  Ok(Outcome) ───────────────────────────────────────────┐│       │  │
//! │  └──────────────────────────────────────────────────────────┼┼───────┘  │
//! │                                                             ▼▼          │
//! │  ui::alert::Alert::from_result ── modal "Error" / "Database error"     │
//! │                                   / "Not found" / "Success"            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The process never exits because of an `ApiError`; it is shown and the
//! form returns to idle.

use stockroom_core::ValidationError;
use stockroom_db::DbError;

/// Error returned from form commands.
///
/// `message` is shown verbatim in the alert; for store failures it carries
/// the driver's own text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// An entry failed validation; no store call was made
    ValidationError,

    /// The selected row no longer exists
    NotFound,

    /// The store rejected or failed the statement
    DatabaseError,

    /// Unexpected internal failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn is_validation(&self) -> bool {
        self.code == ErrorCode::ValidationError
    }
}

/// Converts database errors to API errors, keeping the driver message.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
            DbError::Internal(_) => {
                tracing::error!("Internal database error: {}", err);
                ApiError::internal(err.to_string())
            }
            _ => {
                tracing::error!("Database operation failed: {}", err);
                ApiError::new(ErrorCode::DatabaseError, err.to_string())
            }
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_keeps_driver_message() {
        let err = ApiError::from(DbError::QueryFailed("no such table: products".into()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("no such table: products"));
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            ApiError::from(DbError::not_found("Product", 7)).code,
            ErrorCode::NotFound
        );
        assert_eq!(
            ApiError::from(DbError::Internal("boom".into())).code,
            ErrorCode::Internal
        );
        assert_eq!(
            ApiError::from(DbError::PoolExhausted).code,
            ErrorCode::DatabaseError
        );

        let err = ApiError::from(ValidationError::required("price"));
        assert!(err.is_validation());
        assert_eq!(err.message, "price is required");
    }
}
