//! # Service Error Type
//!
//! Unified error type returned by every service operation.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Rewards Service                    │
//! │                                                                         │
//! │  RewardService::total_rewards(customer_id)                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Database Error? ─── DbError::QueryFailed("...") ──────┐               │
//! │         │                                               │               │
//! │         ▼                                               ▼               │
//! │  Reward Error? ───── CoreError::NoRewardsEarned ──── ServiceError      │
//! │         │                                          { code, message }   │
//! │         ▼                                               │               │
//! │  Success ───────────────────────────────────────────────┼──► caller    │
//! │                                                         │               │
//! │  A transport wrapped around the service maps            │               │
//! │  `code.http_status()` onto its own status line. ◄───────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use reward_core::{CoreError, ValidationError};
use reward_db::DbError;

/// Error returned from service operations.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NO_REWARDS",
///   "message": "No rewards earned for the given transactions."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for service responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Customer or transaction not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Amount is zero or negative after truncation (400)
    InvalidAmount,

    /// Nothing to aggregate (404)
    NoTransactions,

    /// Aggregation summed to zero points (404)
    NoRewards,

    /// Database operation failed (500)
    DatabaseError,

    /// Internal error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status a transport should use for this code.
    pub fn http_status(self) -> u16 {
        match self {
            ErrorCode::NotFound | ErrorCode::NoTransactions | ErrorCode::NoRewards => 404,
            ErrorCode::ValidationError | ErrorCode::InvalidAmount => 400,
            ErrorCode::DatabaseError | ErrorCode::Internal => 500,
        }
    }
}

impl ServiceError {
    /// Creates a new service error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ServiceError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error with a preformatted message.
    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::NotFound, message)
    }

    /// Not found error for an unknown customer id.
    pub fn customer_not_found(id: &str) -> Self {
        ServiceError::not_found(format!("Customer not found with ID: {}", id))
    }

    /// Not found error for an unknown transaction id.
    pub fn transaction_not_found(id: &str) -> Self {
        ServiceError::not_found(format!("Transaction not found with ID: {}", id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to service errors.
impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                ServiceError::not_found(format!("{} not found with ID: {}", entity, id))
            }
            DbError::UniqueViolation { field, value } => ServiceError::validation(format!(
                "{} '{}' already exists",
                field, value
            )),
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ServiceError::validation("Invalid customer reference")
            }
            DbError::ConnectionFailed(_) => {
                ServiceError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ServiceError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ServiceError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ServiceError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ServiceError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts reward calculation errors to service errors.
///
/// The message is the core error's own text, so callers see exactly
/// "Transaction amount must be greater than zero." and friends.
impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidAmount => ErrorCode::InvalidAmount,
            CoreError::NoTransactions => ErrorCode::NoTransactions,
            CoreError::NoRewardsEarned => ErrorCode::NoRewards,
            CoreError::Validation(e) => return ServiceError::validation(e.to_string()),
        };
        ServiceError::new(code, err.to_string())
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::validation(err.to_string())
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ServiceError {}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_keep_their_messages() {
        let err = ServiceError::from(CoreError::InvalidAmount);
        assert_eq!(err.code, ErrorCode::InvalidAmount);
        assert_eq!(err.message, "Transaction amount must be greater than zero.");

        let err = ServiceError::from(CoreError::NoTransactions);
        assert_eq!(err.code, ErrorCode::NoTransactions);
        assert_eq!(err.message, "No transactions found for calculating rewards.");

        let err = ServiceError::from(CoreError::NoRewardsEarned);
        assert_eq!(err.code, ErrorCode::NoRewards);
        assert_eq!(err.message, "No rewards earned for the given transactions.");
    }

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err = ServiceError::from(CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_db_not_found_message() {
        let err = ServiceError::from(DbError::not_found("Transaction", "abc"));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Transaction not found with ID: abc");
    }

    #[test]
    fn test_db_failures_hide_details() {
        let err = ServiceError::from(DbError::QueryFailed("syntax error".to_string()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), 404);
        assert_eq!(ErrorCode::ValidationError.http_status(), 400);
        assert_eq!(ErrorCode::InvalidAmount.http_status(), 400);
        assert_eq!(ErrorCode::NoTransactions.http_status(), 404);
        assert_eq!(ErrorCode::NoRewards.http_status(), 404);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
        assert_eq!(ErrorCode::Internal.http_status(), 500);
    }

    #[test]
    fn test_serializes_code_and_message() {
        let json = serde_json::to_string(&ServiceError::from(CoreError::NoRewardsEarned)).unwrap();
        assert_eq!(
            json,
            r#"{"code":"NO_REWARDS","message":"No rewards earned for the given transactions."}"#
        );
    }
}
