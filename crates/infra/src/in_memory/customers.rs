use std::collections::HashMap;
use std::sync::RwLock;

use orderflow_core::{CustomerId, StoreError};
use orderflow_customers::{Customer, CustomerRepository};

/// In-memory customer directory.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a customer (replacing any previous record with the same id).
    pub fn insert(&self, customer: Customer) {
        let mut customers = self
            .customers
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        customers.insert(customer.id, customer);
    }
}

#[async_trait::async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        let customers = self
            .customers
            .read()
            .map_err(|_| StoreError::unavailable("customer map lock poisoned"))?;
        Ok(customers.get(&id).cloned())
    }
}
