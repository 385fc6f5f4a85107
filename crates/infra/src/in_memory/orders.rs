use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use orderflow_core::{OrderId, OrderLineId, StoreError};
use orderflow_orders::{NewOrder, Order, OrderLine, OrderRepository};

/// In-memory order store.
///
/// The whole order (header + lines) is inserted under one write lock, so a
/// partially-written order is never visible to readers.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError> {
        let stored = Order {
            id: OrderId::new(),
            customer_id: order.customer.id,
            lines: order
                .lines
                .iter()
                .map(|line| OrderLine {
                    id: OrderLineId::new(),
                    product_id: line.product_id,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect(),
            created_at: Utc::now(),
        };

        let mut orders = self
            .orders
            .write()
            .map_err(|_| StoreError::unavailable("order map lock poisoned"))?;
        orders.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| StoreError::unavailable("order map lock poisoned"))?;
        Ok(orders.get(&id).cloned())
    }
}
