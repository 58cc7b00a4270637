//! Product catalog module.
//!
//! Contains the product model with its embedded ESG metadata and
//! transparency scoring, and the read-only catalog store.

mod product;
mod store;
mod transparency;

pub use product::{Category, EsgMetadata, Product, SupplyChain};
pub use store::Catalog;
pub use transparency::{TransparencyIndex, TransparencyScore};
