//! Catalog domain module: products, prices and stock levels.
//!
//! The catalog is the source of truth for prices and available quantities.
//! The order workflow reads both and writes quantities back through
//! [`ProductRepository::update_quantities`].

pub mod product;

pub use product::{Product, ProductRepository, QuantityUpdate};
