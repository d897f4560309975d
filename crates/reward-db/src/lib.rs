//! # reward-db: Database Layer for Loyalty Rewards
//!
//! This crate is the storage collaborator of the reward engine. It uses
//! SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Loyalty Rewards Data Flow                          │
//! │                                                                         │
//! │  RewardService::monthly_rewards(customer_id)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     reward-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐  ┌──────────────┐ │   │
//! │  │   │   Database    │    │   Repositories   │  │  Migrations  │ │   │
//! │  │   │   (pool.rs)   │◄───│ CustomerRepo     │  │  (embedded)  │ │   │
//! │  │   │  SqlitePool   │    │ TransactionRepo  │  │ 001_init.sql │ │   │
//! │  │   └───────────────┘    └──────────────────┘  └──────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Transaction> ──► reward_core::monthly_rewards()                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pool`] - Connection pool and database handle
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Database error types
//! - [`repository`] - Customer and transaction repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reward_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./data/rewards.db")).await?;
//! let transactions = db.transactions().list_by_customer(&customer_id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::customer::CustomerRepository;
pub use repository::transaction::TransactionRepository;
