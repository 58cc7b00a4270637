//! Query pipeline orchestrator.

use crate::catalog::Product;
use crate::search::{search_products, sort_products, EsgFilters, SortKey};

/// Run the full query pipeline: search, then filter, then sort.
///
/// Recomputes over the entire catalog on every call; there is no
/// incremental diffing or memoization. Deterministic: identical inputs
/// produce an identical result vector, and the input slice is never
/// mutated. Callers re-run this once per user input event, not on a hot
/// path.
pub fn run_query(
    catalog: &[Product],
    query: &str,
    filters: &EsgFilters,
    sort: SortKey,
) -> Vec<Product> {
    let searched = search_products(catalog, query);
    let filtered = filters.apply(&searched);
    let sorted = sort_products(&filtered, sort);

    tracing::debug!(
        catalog = catalog.len(),
        searched = searched.len(),
        filtered = filtered.len(),
        sort = sort.as_str(),
        "query pipeline"
    );

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    #[test]
    fn test_pipeline_idempotent_and_non_mutating() {
        let catalog = Catalog::demo();
        let before: Vec<ProductId> = catalog.products().iter().map(|p| p.id.clone()).collect();

        let filters = EsgFilters::default().with_max_carbon_footprint(3.0);
        let first = run_query(catalog.products(), "eleg", &filters, SortKey::PriceLow);
        let second = run_query(catalog.products(), "eleg", &filters, SortKey::PriceLow);

        assert_eq!(first, second);
        assert!(!first.is_empty());

        let after: Vec<ProductId> = catalog.products().iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_composition_order_search_filter_sort() {
        let catalog = Catalog::demo();
        // "casual" matches Recycled Denim Jacket and Hemp Relaxed Trousers
        // by mood tag; the carbon cap then drops neither, and price-high
        // puts the jacket first.
        let filters = EsgFilters::default().with_max_carbon_footprint(2.5);
        let results = run_query(catalog.products(), "casual", &filters, SortKey::PriceHigh);
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Recycled Denim Jacket", "Hemp Relaxed Trousers"]);
    }

    #[test]
    fn test_end_to_end_fixture_scenario() {
        // Six-product demo catalog, slider 80 (score >= 8.0), carbon <= 2.5,
        // empty query, transparency sort: exactly the three qualifying
        // products, descending by overall.
        let catalog = Catalog::demo();
        let filters = EsgFilters::default()
            .with_min_sustainability_score(80.0)
            .with_max_carbon_footprint(2.5);

        let results = run_query(catalog.products(), "", &filters, SortKey::EsgScore);

        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Organic Linen Wrap Dress",
                "Recycled Denim Jacket",
                "Hemp Relaxed Trousers",
            ]
        );
        for p in &results {
            assert!(p.esg.sustainability_score * 10.0 >= 80.0);
            assert!(p.esg.carbon_footprint_kg <= 2.5);
        }
    }

    #[test]
    fn test_empty_catalog() {
        let results = run_query(&[], "anything", &EsgFilters::default(), SortKey::EsgScore);
        assert!(results.is_empty());
    }
}
