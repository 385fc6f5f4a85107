//! In-memory repositories.
//!
//! Intended for tests/dev. Not optimized for performance.

mod customers;
mod orders;
mod products;

pub use customers::InMemoryCustomerRepository;
pub use orders::InMemoryOrderRepository;
pub use products::InMemoryProductRepository;
