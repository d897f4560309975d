//! # Validation Module
//!
//! Input validation for customers and transactions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Service (reward-service)                                     │
//! │  └── Calls THIS MODULE via Customer::new / Transaction::new            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Point formula                                                │
//! │  └── Rejects non-positive amounts with CoreError::InvalidAmount        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use reward_core::validation::{validate_customer_name, validate_transaction_month};
//!
//! assert!(validate_customer_name("Alice").is_ok());
//! assert!(validate_transaction_month("January").is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_CUSTOMER_NAME_LEN, MAX_PERIOD_LABEL_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer display name.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters after trimming
///
/// ## Example
/// ```rust
/// use reward_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Alice").is_ok());
/// assert!(validate_customer_name("").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a transaction period label.
///
/// ## Rules
/// - Must not be empty
/// - At most 20 characters after trimming
/// - Letters, digits, spaces and hyphens only ("January", "2024-01")
pub fn validate_transaction_month(month: &str) -> ValidationResult<()> {
    let month = month.trim();

    if month.is_empty() {
        return Err(ValidationError::Required {
            field: "transaction_month".to_string(),
        });
    }

    if month.chars().count() > MAX_PERIOD_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: "transaction_month".to_string(),
            max: MAX_PERIOD_LABEL_LEN,
        });
    }

    if !month
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "transaction_month".to_string(),
            reason: "must contain only letters, numbers, spaces, and hyphens".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use reward_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Alice").is_ok());
        assert!(validate_customer_name("  Bob Smith ").is_ok());

        assert!(matches!(
            validate_customer_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_customer_name("   ").is_err());
        assert!(matches!(
            validate_customer_name(&"A".repeat(101)),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
    }

    #[test]
    fn test_validate_transaction_month() {
        assert!(validate_transaction_month("January").is_ok());
        assert!(validate_transaction_month("2024-01").is_ok());
        assert!(validate_transaction_month("Jan 2024").is_ok());

        assert!(validate_transaction_month("").is_err());
        assert!(validate_transaction_month("Jan/2024").is_err());
        assert!(validate_transaction_month(&"M".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
        assert!(validate_uuid("123").is_err());
    }
}
