//! # Customer Repository
//!
//! Database operations for loyalty program customers.
//!
//! Deleting a customer also deletes their transactions
//! (`ON DELETE CASCADE`).

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use reward_core::Customer;

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let customer = repo.insert(&Customer::new("Alice")?).await?;
/// let found = repo.get_by_id(&customer.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Gets a customer by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - Customer not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Lists all customers ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM customers
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Inserts a new customer.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - Inserted customer
    /// * `Err(DbError::UniqueViolation)` - ID already exists
    pub async fn insert(&self, customer: &Customer) -> DbResult<Customer> {
        debug!(id = %customer.id, "Inserting customer");

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(customer.clone())
    }

    /// Updates an existing customer's name.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - The customer as stored, with a fresh `updated_at`
    /// * `Err(DbError::NotFound)` - Customer doesn't exist
    pub async fn update(&self, customer: &Customer) -> DbResult<Customer> {
        debug!(id = %customer.id, "Updating customer");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE customers SET
                name = ?2,
                updated_at = ?3
            WHERE id = ?1
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", &customer.id));
        }

        let mut updated = customer.clone();
        updated.updated_at = now;
        Ok(updated)
    }

    /// Deletes a customer and, through the foreign key, their transactions.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Customer doesn't exist
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Counts total customers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> CustomerRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.customers()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = repo().await;
        let customer = Customer::new("Alice").unwrap();

        repo.insert(&customer).await.unwrap();
        let found = repo.get_by_id(&customer.id).await.unwrap().unwrap();

        assert_eq!(found.id, customer.id);
        assert_eq!(found.name, "Alice");
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = repo().await;
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_unique_violation() {
        let repo = repo().await;
        let customer = Customer::new("Alice").unwrap();

        repo.insert(&customer).await.unwrap();
        let err = repo.insert(&customer).await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_update() {
        let repo = repo().await;
        let mut customer = Customer::new("Alice").unwrap();
        repo.insert(&customer).await.unwrap();

        customer.name = "Alicia".to_string();
        let updated = repo.update(&customer).await.unwrap();
        assert!(updated.updated_at >= customer.created_at);

        let found = repo.get_by_id(&customer.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Alicia");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repo().await;
        let customer = Customer::new("Ghost").unwrap();

        let err = repo.update(&customer).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        let customer = Customer::new("Alice").unwrap();
        repo.insert(&customer).await.unwrap();

        repo.delete(&customer.id).await.unwrap();

        assert!(repo.get_by_id(&customer.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&customer.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let repo = repo().await;
        repo.insert(&Customer::new("Charlie").unwrap()).await.unwrap();
        repo.insert(&Customer::new("Alice").unwrap()).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["Alice", "Charlie"]);
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
