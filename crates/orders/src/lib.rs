//! Orders domain module: the order-placement workflow.
//!
//! [`OrderService`] orchestrates three collaborators — customer lookup,
//! product catalog and order store — to validate and place one order:
//! resolve the customer, snapshot the requested products, check stock,
//! capture prices, persist the order atomically, then decrement inventory
//! from the snapshot. Everything before persistence is pure read+compare;
//! inventory is never touched unless the order write succeeded.

pub mod error;
pub mod locks;
pub mod order;
pub mod repository;
pub mod service;

pub use error::OrderError;
pub use locks::ProductLocks;
pub use order::{CreateOrderRequest, NewOrder, NewOrderLine, Order, OrderLine, OrderLineRequest};
pub use repository::OrderRepository;
pub use service::OrderService;
