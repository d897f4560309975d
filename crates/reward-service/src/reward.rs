//! # Reward Service
//!
//! Loads transactions from storage and runs them through the reward
//! calculation core.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Reward Lookup Flow                                  │
//! │                                                                         │
//! │  transaction_rewards(tx_id)                                            │
//! │       │  transactions().get_by_id ──► None? NOT_FOUND                  │
//! │       ▼                                                                 │
//! │  rewards_for_transaction(&tx)  ──► INVALID_AMOUNT                      │
//! │                                                                         │
//! │  monthly_rewards(customer_id) / total_rewards(customer_id)             │
//! │       │  transactions().list_by_customer                                │
//! │       ▼                                                                 │
//! │  reward_core::monthly_rewards / total_rewards                          │
//! │       └──► NO_TRANSACTIONS | INVALID_AMOUNT | NO_REWARDS               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A customer id that does not exist behaves like a customer without
//! purchases: both yield `NO_TRANSACTIONS`.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};
use reward_core::{rewards, CoreError, Customer, MonthlyRewards, RewardSummary};
use reward_db::Database;

/// Reward entry for one customer in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerReport {
    pub customer_id: String,
    pub customer_name: String,

    /// `None` when the customer has no transactions.
    pub rewards: Option<RewardSummary>,

    /// Set when the customer's rewards could not be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ServiceError>,
}

/// Reward calculation operations backed by storage.
#[derive(Debug, Clone)]
pub struct RewardService {
    db: Database,
}

impl RewardService {
    /// Creates a new RewardService.
    pub fn new(db: Database) -> Self {
        RewardService { db }
    }

    /// Points earned by a single transaction.
    pub async fn transaction_rewards(&self, transaction_id: &str) -> ServiceResult<i64> {
        debug!(transaction_id = %transaction_id, "Calculating transaction rewards");

        let transaction = self
            .db
            .transactions()
            .get_by_id(transaction_id)
            .await?
            .ok_or_else(|| ServiceError::transaction_not_found(transaction_id))?;

        let points = rewards::rewards_for_transaction(&transaction)?;

        info!(transaction_id = %transaction_id, points, "Transaction rewards calculated");
        Ok(points)
    }

    /// Points per month for a customer.
    pub async fn monthly_rewards(&self, customer_id: &str) -> ServiceResult<MonthlyRewards> {
        debug!(customer_id = %customer_id, "Calculating monthly rewards");

        let transactions = self.db.transactions().list_by_customer(customer_id).await?;
        let monthly = rewards::monthly_rewards(&transactions)?;

        info!(
            customer_id = %customer_id,
            months = monthly.len(),
            "Monthly rewards calculated"
        );
        Ok(monthly)
    }

    /// Total points for a customer.
    ///
    /// ## Errors
    /// `NO_REWARDS` when every purchase stayed at or below $50.
    pub async fn total_rewards(&self, customer_id: &str) -> ServiceResult<i64> {
        debug!(customer_id = %customer_id, "Calculating total rewards");

        let transactions = self.db.transactions().list_by_customer(customer_id).await?;
        let total = rewards::total_rewards(&transactions)?;

        info!(customer_id = %customer_id, total, "Total rewards calculated");
        Ok(total)
    }

    /// Builds the report entry for one customer.
    pub async fn customer_report(&self, customer: &Customer) -> ServiceResult<CustomerReport> {
        let transactions = self.db.transactions().list_by_customer(&customer.id).await?;

        let (rewards, error) = match rewards::reward_summary(&transactions) {
            Ok(summary) => (Some(summary), None),
            Err(CoreError::NoTransactions) => (None, None),
            Err(e) => {
                warn!(customer_id = %customer.id, error = %e, "Rewards could not be computed");
                (None, Some(ServiceError::from(e)))
            }
        };

        Ok(CustomerReport {
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            rewards,
            error,
        })
    }

    /// Builds the report for every customer, ordered by name.
    ///
    /// A customer with an invalid amount gets an `error` entry instead of
    /// failing the report for everyone else.
    pub async fn report(&self) -> ServiceResult<Vec<CustomerReport>> {
        let customers = self.db.customers().list().await?;
        let mut report = Vec::with_capacity(customers.len());

        for customer in &customers {
            report.push(self.customer_report(customer).await?);
        }

        info!(customers = report.len(), "Reward report built");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use reward_core::{Money, Transaction};
    use reward_db::DbConfig;

    async fn setup() -> (RewardService, Database, Customer) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customer = db
            .customers()
            .insert(&Customer::new("Alice").unwrap())
            .await
            .unwrap();
        (RewardService::new(db.clone()), db, customer)
    }

    async fn record(db: &Database, customer: &Customer, cents: i64, month: &str) -> Transaction {
        let tx = Transaction::new(&customer.id, Money::from_cents(cents), month).unwrap();
        db.transactions().insert(&tx).await.unwrap()
    }

    #[tokio::test]
    async fn test_transaction_rewards() {
        let (service, db, alice) = setup().await;
        let tx = record(&db, &alice, 10950, "January").await;

        assert_eq!(service.transaction_rewards(&tx.id).await.unwrap(), 68);
    }

    #[tokio::test]
    async fn test_transaction_rewards_missing() {
        let (service, _, _) = setup().await;

        let err = service.transaction_rewards("nope").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Transaction not found with ID: nope");
    }

    #[tokio::test]
    async fn test_transaction_rewards_invalid_amount() {
        let (service, db, alice) = setup().await;
        let tx = record(&db, &alice, -5000, "January").await;

        let err = service.transaction_rewards(&tx.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);
        assert_eq!(err.message, "Transaction amount must be greater than zero.");
    }

    #[tokio::test]
    async fn test_monthly_rewards() {
        let (service, db, alice) = setup().await;
        record(&db, &alice, 6000, "January").await;
        record(&db, &alice, 12000, "January").await;
        record(&db, &alice, 3000, "February").await;

        let monthly = service.monthly_rewards(&alice.id).await.unwrap();

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly["January"], 100);
        assert_eq!(monthly["February"], 0);
    }

    #[tokio::test]
    async fn test_monthly_rewards_without_transactions() {
        let (service, _, alice) = setup().await;

        let err = service.monthly_rewards(&alice.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoTransactions);

        let err = service.monthly_rewards("unknown").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoTransactions);
    }

    #[tokio::test]
    async fn test_total_rewards() {
        let (service, db, alice) = setup().await;
        record(&db, &alice, 15000, "January").await;
        record(&db, &alice, 7000, "February").await;

        assert_eq!(service.total_rewards(&alice.id).await.unwrap(), 170);
    }

    #[tokio::test]
    async fn test_total_rewards_zero_is_no_rewards() {
        let (service, db, alice) = setup().await;
        record(&db, &alice, 1000, "January").await;
        record(&db, &alice, 1000, "January").await;

        let err = service.total_rewards(&alice.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoRewards);
        assert_eq!(err.message, "No rewards earned for the given transactions.");
    }

    #[tokio::test]
    async fn test_total_rewards_fails_fast() {
        let (service, db, alice) = setup().await;
        record(&db, &alice, 15000, "January").await;
        record(&db, &alice, 0, "January").await;

        let err = service.total_rewards(&alice.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAmount);
    }

    #[tokio::test]
    async fn test_report() {
        let (service, db, alice) = setup().await;
        let bob = db
            .customers()
            .insert(&Customer::new("Bob").unwrap())
            .await
            .unwrap();
        let carol = db
            .customers()
            .insert(&Customer::new("Carol").unwrap())
            .await
            .unwrap();
        record(&db, &alice, 12000, "January").await;
        record(&db, &alice, 3000, "February").await;
        record(&db, &carol, 0, "March").await;

        let report = service.report().await.unwrap();
        assert_eq!(report.len(), 3);

        let alice_entry = &report[0];
        assert_eq!(alice_entry.customer_name, "Alice");
        let summary = alice_entry.rewards.as_ref().unwrap();
        assert_eq!(summary.total_points, 90);
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.monthly_points["February"], 0);

        assert_eq!(report[1].customer_id, bob.id);
        assert!(report[1].rewards.is_none());
        assert!(report[1].error.is_none());

        let carol_entry = &report[2];
        assert!(carol_entry.rewards.is_none());
        assert_eq!(
            carol_entry.error.as_ref().map(|e| e.code),
            Some(ErrorCode::InvalidAmount)
        );
    }

    #[tokio::test]
    async fn test_report_serializes_null_rewards() {
        let (service, _, alice) = setup().await;

        let entry = service.customer_report(&alice).await.unwrap();
        let json = serde_json::to_value(&entry).unwrap();

        assert!(json["rewards"].is_null());
        assert!(json.get("error").is_none());
    }
}
