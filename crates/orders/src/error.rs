//! Order workflow error taxonomy.

use thiserror::Error;

use orderflow_core::{CustomerId, DomainError, OrderId, ProductId, StoreError};

/// Everything that can terminate an order operation.
///
/// All variants are terminal for the current call; the workflow never
/// retries. Every variant carries enough detail (offending id, requested vs.
/// available) for the caller to render a precise message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Request shape was invalid (empty line list, zero quantity).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The customer id did not resolve.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    /// The batch product lookup matched nothing at all.
    #[error("no products found for the requested ids")]
    NoProductsFound,

    /// A specific requested id has no catalog match (first unmatched request
    /// in input order).
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// Requested quantity exceeds what the catalog has left (first violating
    /// line in input order).
    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u64,
    },

    /// Query path: the order id did not resolve.
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    /// A collaborator failed before the order was persisted. No side effects
    /// occurred.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),

    /// The inventory write failed *after* the order was persisted. The order
    /// exists; stock was not decremented. Callers must treat this as a
    /// correctness incident, not a failed order.
    #[error("inventory update failed after order {order_id} was persisted: {source}")]
    InventoryUpdate {
        order_id: OrderId,
        source: StoreError,
    },
}
