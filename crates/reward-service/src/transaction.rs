//! # Transaction Service
//!
//! Records and maintains customer purchases.
//!
//! ## Ownership Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_transaction(customer_id, amount, month)                        │
//! │       │                                                                 │
//! │       ├── customer missing? ──► NOT_FOUND                              │
//! │       ▼                                                                 │
//! │  stored with owner = customer_id                                       │
//! │                                                                         │
//! │  update_transaction(id, amount, month)                                 │
//! │       │                                                                 │
//! │       └── owner copied from the stored record, never reassigned        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are stored as given. A zero or negative amount is only rejected
//! when rewards are computed for it.

use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use reward_core::validation::validate_transaction_month;
use reward_core::{Money, Transaction};
use reward_db::{Database, DbError};

/// Transaction management operations.
#[derive(Debug, Clone)]
pub struct TransactionService {
    db: Database,
}

impl TransactionService {
    /// Creates a new TransactionService.
    pub fn new(db: Database) -> Self {
        TransactionService { db }
    }

    /// Records a purchase for an existing customer.
    pub async fn create_transaction(
        &self,
        customer_id: &str,
        amount: Money,
        transaction_month: &str,
    ) -> ServiceResult<Transaction> {
        if self.db.customers().get_by_id(customer_id).await?.is_none() {
            return Err(ServiceError::customer_not_found(customer_id));
        }

        let transaction = Transaction::new(customer_id, amount, transaction_month)?;
        let saved = self.db.transactions().insert(&transaction).await?;

        info!(
            transaction_id = %saved.id,
            customer_id = %customer_id,
            amount = %amount,
            month = %saved.transaction_month,
            "Transaction recorded"
        );
        Ok(saved)
    }

    /// Gets a transaction by ID.
    pub async fn get_transaction(&self, id: &str) -> ServiceResult<Transaction> {
        debug!(transaction_id = %id, "Fetching transaction");

        self.db
            .transactions()
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::transaction_not_found(id))
    }

    /// Changes the amount and month of a transaction, keeping its owner.
    pub async fn update_transaction(
        &self,
        id: &str,
        amount: Money,
        transaction_month: &str,
    ) -> ServiceResult<Transaction> {
        validate_transaction_month(transaction_month)?;

        let mut transaction = self.get_transaction(id).await?;
        transaction.amount_cents = amount.cents();
        transaction.transaction_month = transaction_month.trim().to_string();

        let updated = self.db.transactions().update(&transaction).await?;
        info!(transaction_id = %id, amount = %amount, "Transaction updated");
        Ok(updated)
    }

    /// Deletes a transaction.
    pub async fn delete_transaction(&self, id: &str) -> ServiceResult<()> {
        match self.db.transactions().delete(id).await {
            Ok(()) => {
                info!(transaction_id = %id, "Transaction deleted");
                Ok(())
            }
            Err(DbError::NotFound { .. }) => Err(ServiceError::transaction_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists every transaction.
    pub async fn list_transactions(&self) -> ServiceResult<Vec<Transaction>> {
        Ok(self.db.transactions().list().await?)
    }

    /// Lists a customer's transactions.
    ///
    /// ## Errors
    /// `NOT_FOUND` with "No transactions found for customer ID: {id}" when
    /// the list would be empty.
    pub async fn transactions_for_customer(
        &self,
        customer_id: &str,
    ) -> ServiceResult<Vec<Transaction>> {
        let transactions = self.db.transactions().list_by_customer(customer_id).await?;

        if transactions.is_empty() {
            return Err(ServiceError::not_found(format!(
                "No transactions found for customer ID: {}",
                customer_id
            )));
        }

        Ok(transactions)
    }
}
