//! # Rewards Report
//!
//! Prints a JSON reward report for every customer to stdout.
//!
//! ## Usage
//! ```bash
//! REWARDS_DATABASE_PATH=./rewards_dev.db cargo run -p reward-service --bin rewards-report
//! ```
//!
//! ## Output
//! ```json
//! [
//!   {
//!     "customer_id": "…",
//!     "customer_name": "Alice Johnson",
//!     "rewards": {
//!       "transaction_count": 4,
//!       "monthly_points": { "February": 90, "January": 20 },
//!       "total_points": 110
//!     }
//!   }
//! ]
//! ```

use anyhow::Context;
use tracing::info;

use reward_db::Database;
use reward_service::telemetry::init_tracing;
use reward_service::{RewardService, RewardsConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RewardsConfig::load()?;
    init_tracing(&config.log_level);

    info!(
        path = %config.database_path.display(),
        max_connections = config.db_max_connections,
        "Configuration loaded"
    );

    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let db = Database::new(config.db_config())
        .await
        .context("opening rewards database")?;

    let report = RewardService::new(db.clone()).report().await?;

    let json = if config.report_pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    db.close().await;
    Ok(())
}
