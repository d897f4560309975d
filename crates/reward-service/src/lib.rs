//! # reward-service: Service Layer for Loyalty Rewards
//!
//! Composes the SQLite repositories from `reward-db` with the calculation
//! core in `reward-core`, and maps every failure to a [`ServiceError`]
//! carrying a machine-readable [`ErrorCode`].
//!
//! ## Module Organization
//! ```text
//! reward_service/
//! ├── lib.rs          ← You are here (re-exports, Services bundle)
//! ├── config.rs       ← RewardsConfig (environment variables)
//! ├── error.rs        ← ServiceError + ErrorCode
//! ├── telemetry.rs    ← tracing-subscriber setup
//! ├── customer.rs     ← CustomerService
//! ├── transaction.rs  ← TransactionService
//! └── reward.rs       ← RewardService + report
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let db = Database::new(DbConfig::new("./data/rewards.db")).await?;
//! let services = Services::new(db);
//!
//! let alice = services.customers.create_customer("Alice").await?;
//! services
//!     .transactions
//!     .create_transaction(&alice.id, "120.00".parse()?, "January")
//!     .await?;
//!
//! let total = services.rewards.total_rewards(&alice.id).await?; // 90
//! ```

pub mod config;
pub mod customer;
pub mod error;
pub mod reward;
pub mod telemetry;
pub mod transaction;

pub use config::{ConfigError, RewardsConfig};
pub use customer::CustomerService;
pub use error::{ErrorCode, ServiceError, ServiceResult};
pub use reward::{CustomerReport, RewardService};
pub use transaction::TransactionService;

use reward_db::Database;

/// All services sharing one database pool.
#[derive(Debug, Clone)]
pub struct Services {
    pub customers: CustomerService,
    pub transactions: TransactionService,
    pub rewards: RewardService,
}

impl Services {
    /// Builds every service over the same database handle.
    pub fn new(db: Database) -> Self {
        Services {
            customers: CustomerService::new(db.clone()),
            transactions: TransactionService::new(db.clone()),
            rewards: RewardService::new(db),
        }
    }
}
