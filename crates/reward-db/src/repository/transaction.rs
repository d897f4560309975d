//! # Transaction Repository
//!
//! Database operations for purchase transactions.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                Lookups Feeding the Reward Engine                        │
//! │                                                                         │
//! │  get_by_id(tx_id)            ──► rewards_for_transaction(&tx)          │
//! │                                                                         │
//! │  list_by_customer(cust_id)   ──► monthly_rewards(&txs)                 │
//! │                              └─► total_rewards(&txs)                   │
//! │                                                                         │
//! │  An unknown customer and a customer without purchases both yield an   │
//! │  empty Vec here; telling them apart is the service's job.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use reward_core::Transaction;

/// Repository for transaction database operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Gets a transaction by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Transaction))` - Transaction found
    /// * `Ok(None)` - Transaction not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, customer_id, amount_cents, transaction_month, created_at, updated_at
            FROM transactions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    /// Lists every transaction in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, customer_id, amount_cents, transaction_month, created_at, updated_at
            FROM transactions
            ORDER BY created_at, rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    /// Lists all transactions owned by a customer, in insertion order.
    ///
    /// Returns an empty Vec when the customer has no transactions or does
    /// not exist.
    pub async fn list_by_customer(&self, customer_id: &str) -> DbResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, customer_id, amount_cents, transaction_month, created_at, updated_at
            FROM transactions
            WHERE customer_id = ?1
            ORDER BY created_at, rowid
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            customer_id = %customer_id,
            count = transactions.len(),
            "Loaded customer transactions"
        );
        Ok(transactions)
    }

    /// Inserts a new transaction.
    ///
    /// ## Returns
    /// * `Ok(Transaction)` - Inserted transaction
    /// * `Err(DbError::ForeignKeyViolation)` - Owning customer doesn't exist
    pub async fn insert(&self, transaction: &Transaction) -> DbResult<Transaction> {
        debug!(
            id = %transaction.id,
            customer_id = %transaction.customer_id,
            amount_cents = transaction.amount_cents,
            "Inserting transaction"
        );

        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, customer_id, amount_cents, transaction_month, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&transaction.id)
        .bind(&transaction.customer_id)
        .bind(transaction.amount_cents)
        .bind(&transaction.transaction_month)
        .bind(transaction.created_at)
        .bind(transaction.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(transaction.clone())
    }

    /// Updates the amount and month of an existing transaction.
    ///
    /// The owning customer is never changed by an update; `customer_id` on
    /// the argument is ignored.
    ///
    /// ## Returns
    /// * `Ok(Transaction)` - The transaction as stored after the update
    /// * `Err(DbError::NotFound)` - Transaction doesn't exist
    pub async fn update(&self, transaction: &Transaction) -> DbResult<Transaction> {
        debug!(id = %transaction.id, "Updating transaction");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE transactions SET
                amount_cents = ?2,
                transaction_month = ?3,
                updated_at = ?4
            WHERE id = ?1
            "#,
        )
        .bind(&transaction.id)
        .bind(transaction.amount_cents)
        .bind(&transaction.transaction_month)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Transaction", &transaction.id));
        }

        self.get_by_id(&transaction.id)
            .await?
            .ok_or_else(|| DbError::not_found("Transaction", &transaction.id))
    }

    /// Deletes a transaction.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Transaction doesn't exist
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting transaction");

        let result = sqlx::query("DELETE FROM transactions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Transaction", id));
        }

        Ok(())
    }

    /// Counts total transactions (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
