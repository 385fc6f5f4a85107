use std::sync::Arc;

use orderflow_core::{OrderId, StoreError};

use crate::order::{NewOrder, Order};

/// Order persistence collaborator.
#[async_trait::async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist an order and all of its lines as one atomic operation.
    ///
    /// Implementations assign the order id, line ids and creation timestamp,
    /// and must never leave a partially-written order visible to readers.
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError>;

    /// Resolve a previously stored order. `None` when the id is unknown.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;
}

#[async_trait::async_trait]
impl<S> OrderRepository for Arc<S>
where
    S: OrderRepository + ?Sized,
{
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError> {
        (**self).create(order).await
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        (**self).find_by_id(id).await
    }
}
