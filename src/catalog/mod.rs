//! Product catalog module.
//!
//! Contains the product record types and the in-memory store.

mod product;
mod store;

pub use product::{Inventory, Product, Rating};
pub use store::Catalog;
