//! Infrastructure implementations of the order workflow's collaborators.
//!
//! Currently in-memory only (tests/dev); production deployments supply their
//! own implementations of the repository traits.

pub mod in_memory;


pub use in_memory::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
