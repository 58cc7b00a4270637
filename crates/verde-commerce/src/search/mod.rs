//! Search, filtering, sorting, and the query pipeline.
//!
//! All functions here are pure: they take product slices and return fresh
//! vectors, preserving input order unless a sort key says otherwise.

mod filters;
mod matcher;
mod pipeline;
mod sort;

pub use filters::EsgFilters;
pub use matcher::search_products;
pub use pipeline::run_query;
pub use sort::{sort_products, SortKey};
