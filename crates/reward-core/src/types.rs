//! # Domain Types
//!
//! Core domain types used throughout the rewards system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐                        │
//! │  │    Customer     │   │     Transaction      │                        │
//! │  │  ─────────────  │ 1 │  ──────────────────  │                        │
//! │  │  id (UUID)      │◄──┤  customer_id (FK)    │                        │
//! │  │  name           │ * │  id (UUID)           │                        │
//! │  └─────────────────┘   │  amount_cents        │                        │
//! │                        │  transaction_month   │                        │
//! │                        └──────────┬───────────┘                        │
//! │                                   │ rewards::*                         │
//! │                                   ▼                                     │
//! │                        ┌──────────────────────┐                        │
//! │                        │    RewardSummary     │  (never persisted)     │
//! │                        │  monthly_points      │                        │
//! │                        │  total_points        │                        │
//! │                        └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::money::Money;
use crate::validation::{
    validate_customer_name, validate_transaction_month, validate_uuid, ValidationResult,
};

// =============================================================================
// Customer
// =============================================================================

/// A loyalty program member.
///
/// The calculation core only uses a customer to select which transactions
/// belong to a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// When the customer was created.
    pub created_at: DateTime<Utc>,

    /// When the customer was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new customer with a generated id.
    ///
    /// The name is trimmed and validated.
    pub fn new(name: &str) -> ValidationResult<Self> {
        validate_customer_name(name)?;
        let now = Utc::now();

        Ok(Customer {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A purchase made by a customer.
///
/// Treated as an immutable input value by the reward functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Transaction {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Owning customer.
    pub customer_id: String,

    /// Purchase amount in cents.
    pub amount_cents: i64,

    /// Period label used as the monthly aggregation key (e.g. "January").
    pub transaction_month: String,

    /// When the transaction was recorded.
    pub created_at: DateTime<Utc>,

    /// When the transaction was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a new transaction with a generated id.
    ///
    /// The amount is not checked here: zero and negative amounts are
    /// accepted and rejected later by the point formula.
    pub fn new(customer_id: &str, amount: Money, transaction_month: &str) -> ValidationResult<Self> {
        validate_uuid(customer_id)?;
        validate_transaction_month(transaction_month)?;
        let now = Utc::now();

        Ok(Transaction {
            id: Uuid::new_v4().to_string(),
            customer_id: customer_id.to_string(),
            amount_cents: amount.cents(),
            transaction_month: transaction_month.trim().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Reward Results
// =============================================================================

/// Points per period label.
///
/// Only periods that have at least one transaction appear as keys. The map
/// is ordered by label for stable output; callers must not read meaning
/// into that order.
pub type MonthlyRewards = BTreeMap<String, i64>;

/// Monthly breakdown and total for one set of transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSummary {
    /// Number of transactions the summary was computed from.
    pub transaction_count: usize,

    /// Points per period.
    pub monthly_points: MonthlyRewards,

    /// Sum of all points.
    pub total_points: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
