//! Customers domain module.
//!
//! The order workflow only ever *reads* customers; ownership of the customer
//! lifecycle sits with whatever subsystem implements [`CustomerRepository`].

pub mod customer;

pub use customer::{Customer, CustomerRepository};
