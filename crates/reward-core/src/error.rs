//! # Error Types
//!
//! Domain-specific error types for reward-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  reward-core errors (this file)                                        │
//! │  ├── CoreError        - Reward calculation failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  reward-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  reward-service errors                                                 │
//! │  └── ServiceError     - What callers see (code + message)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → Caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every aggregation failure is fail-fast: the first error aborts the whole
//! computation and no partial result is returned.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Reward calculation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Transaction amount is zero or negative after truncation to whole dollars.
    ///
    /// ## When This Occurs
    /// - Amount is `0.00` or negative
    /// - Amount is below one dollar (`0.99` truncates to `0`)
    #[error("Transaction amount must be greater than zero.")]
    InvalidAmount,

    /// The transaction collection handed to an aggregation is empty.
    #[error("No transactions found for calculating rewards.")]
    NoTransactions,

    /// A total over a non-empty, fully valid set summed to zero points.
    ///
    /// ## User Workflow
    /// ```text
    /// Customer spent $10 + $10
    ///      │
    ///      ▼
    /// total_rewards() = 0 + 0 = 0
    ///      │
    ///      ▼
    /// NoRewardsEarned (reported, never a silent 0)
    /// ```
    #[error("No rewards earned for the given transactions.")]
    NoRewardsEarned,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before records reach storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., invalid UUID, malformed amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
