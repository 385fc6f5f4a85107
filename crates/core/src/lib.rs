//! `orderflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (identifiers and error
//! types) shared by the customer, catalog and order crates. No IO, no
//! storage concerns.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult, StoreError};
pub use id::{CustomerId, OrderId, OrderLineId, ProductId};
