use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderflow_core::{CustomerId, OrderId, OrderLineId, ProductId};
use orderflow_customers::Customer;

/// One requested line: which product, how many units.
///
/// Duplicate product ids across a request are allowed and stay separate
/// entries; the workflow never merges them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Input to [`crate::OrderService::create_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLineRequest>,
}

/// A line ready for persistence: request quantity paired with the catalog
/// price captured at order time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub product_id: ProductId,
    pub quantity: u64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

/// A validated order handed to the store for atomic persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    pub lines: Vec<NewOrderLine>,
}

/// A persisted line. `unit_price` is the catalog price at order time and is
/// immutable afterwards, decoupled from later catalog price changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: OrderLineId,
    pub product_id: ProductId,
    pub quantity: u64,
    pub unit_price: u64,
}

/// A persisted order. Created atomically with all its lines, read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Order total, derived from the lines. No total is ever stored, so it
    /// cannot drift from them.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity * l.unit_price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_derives_from_lines() {
        let order = Order {
            id: OrderId::new(),
            customer_id: CustomerId::new(),
            lines: vec![
                OrderLine {
                    id: OrderLineId::new(),
                    product_id: ProductId::new(),
                    quantity: 2,
                    unit_price: 1000,
                },
                OrderLine {
                    id: OrderLineId::new(),
                    product_id: ProductId::new(),
                    quantity: 3,
                    unit_price: 250,
                },
            ],
            created_at: Utc::now(),
        };

        assert_eq!(order.total(), 2 * 1000 + 3 * 250);
    }

    #[test]
    fn total_of_empty_order_is_zero() {
        let order = Order {
            id: OrderId::new(),
            customer_id: CustomerId::new(),
            lines: vec![],
            created_at: Utc::now(),
        };

        assert_eq!(order.total(), 0);
    }
}
