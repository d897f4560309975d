//! # Customer Service
//!
//! Create, read, update and delete loyalty program members.

use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use reward_core::validation::validate_customer_name;
use reward_core::Customer;
use reward_db::{Database, DbError};

/// Customer management operations.
#[derive(Debug, Clone)]
pub struct CustomerService {
    db: Database,
}

impl CustomerService {
    /// Creates a new CustomerService.
    pub fn new(db: Database) -> Self {
        CustomerService { db }
    }

    /// Registers a new customer.
    pub async fn create_customer(&self, name: &str) -> ServiceResult<Customer> {
        let customer = Customer::new(name)?;
        let saved = self.db.customers().insert(&customer).await?;

        info!(customer_id = %saved.id, "Customer created");
        Ok(saved)
    }

    /// Gets a customer by ID.
    ///
    /// ## Errors
    /// `NOT_FOUND` with "Customer not found with ID: {id}".
    pub async fn get_customer(&self, id: &str) -> ServiceResult<Customer> {
        debug!(customer_id = %id, "Fetching customer");

        self.db
            .customers()
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::customer_not_found(id))
    }

    /// Renames an existing customer.
    pub async fn update_customer(&self, id: &str, name: &str) -> ServiceResult<Customer> {
        validate_customer_name(name)?;

        let mut customer = self.get_customer(id).await?;
        customer.name = name.trim().to_string();

        let updated = self.db.customers().update(&customer).await?;
        info!(customer_id = %id, "Customer updated");
        Ok(updated)
    }

    /// Deletes a customer together with all of their transactions.
    pub async fn delete_customer(&self, id: &str) -> ServiceResult<()> {
        match self.db.customers().delete(id).await {
            Ok(()) => {
                info!(customer_id = %id, "Customer deleted");
                Ok(())
            }
            Err(DbError::NotFound { .. }) => Err(ServiceError::customer_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all customers ordered by name.
    pub async fn list_customers(&self) -> ServiceResult<Vec<Customer>> {
        Ok(self.db.customers().list().await?)
    }
}
