//! Customers domain module.
//!
//! This crate contains the customer record, its input types, and the
//! in-memory store that owns all records, implemented purely as
//! deterministic domain logic (no IO, no HTTP).

pub mod customer;
pub mod store;

pub use customer::{Customer, CustomerPatch, NewCustomer, DEFAULT_STATUS};
pub use store::CustomerStore;
