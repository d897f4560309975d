//! # reward-core: Pure Business Logic for Loyalty Rewards
//!
//! This crate is the **heart** of the rewards system. It turns purchase
//! transactions into loyalty points as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Loyalty Rewards Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 reward-service (Service Layer)                  │   │
//! │  │   CustomerService ─ TransactionService ─ RewardService          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ reward-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  rewards  │  │ validation│  │   │
//! │  │   │ Customer  │  │   Money   │  │ points_for│  │   rules   │  │   │
//! │  │   │Transaction│  │           │  │ monthly   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    reward-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Transaction, RewardSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rewards`] - Point formula and aggregation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use reward_core::money::Money;
//! use reward_core::rewards::points_for;
//!
//! // $120.00 → 2 × 20 + 50 = 90 points
//! let points = points_for("120.00".parse::<Money>().unwrap()).unwrap();
//! assert_eq!(points, 90);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod rewards;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use rewards::{monthly_rewards, points_for, reward_summary, rewards_for_transaction, total_rewards};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Whole-dollar amount above which one point per dollar is earned.
pub const LOWER_TIER_THRESHOLD: i64 = 50;

/// Maximum points the one-point tier can contribute ($50 → $100).
pub const LOWER_TIER_CAP: i64 = 50;

/// Whole-dollar amount above which the double-point tier applies.
pub const UPPER_TIER_THRESHOLD: i64 = 100;

/// Points per dollar spent above [`UPPER_TIER_THRESHOLD`].
pub const UPPER_TIER_MULTIPLIER: i64 = 2;

/// Maximum length of a customer display name.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;

/// Maximum length of a transaction period label.
pub const MAX_PERIOD_LABEL_LEN: usize = 20;
