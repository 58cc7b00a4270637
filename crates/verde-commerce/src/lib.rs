//! Storefront domain types and logic for Verde.
//!
//! This crate provides the core types for the mood-based sustainable
//! fashion storefront:
//!
//! - **Catalog**: Products with embedded ESG metadata and transparency scores
//! - **Search**: ESG filters, mood/text matching, sorting, the query pipeline
//! - **Cart**: Pure reducers for cart and wishlist state
//!
//! Everything in this crate is synchronous and side-effect free. The query
//! pipeline recomputes over the full catalog on every call; callers own the
//! decision of when to re-run it.
//!
//! # Example
//!
//! ```rust
//! use verde_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//!
//! let filters = EsgFilters::default()
//!     .with_min_sustainability_score(80.0)
//!     .with_max_carbon_footprint(2.5);
//!
//! let results = run_query(catalog.products(), "", &filters, SortKey::EsgScore);
//! for product in &results {
//!     println!("{} ({})", product.name, product.transparency.overall);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::StorefrontError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, EsgMetadata, Product, SupplyChain, TransparencyIndex,
        TransparencyScore,
    };

    // Search
    pub use crate::search::{run_query, search_products, sort_products, EsgFilters, SortKey};

    // Cart
    pub use crate::cart::{
        add_item, group_by_mood, remove_item, total_items, total_price, update_quantity,
        CartItem, MoodGroup, WishlistItem,
    };
}
