//! Mood and free-text search matcher.

use crate::catalog::Product;

/// Retain products matching a free-text query.
///
/// An empty or whitespace-only query returns all products unchanged. A
/// product matches when the query appears as a case-insensitive substring of
/// its name, description, or any mood tag, or when the query itself contains
/// the product's full space-joined mood line.
///
/// The reverse containment is intentional: it lets a long phrase like
/// "i want to slay confident" match a product tagged only `confident`.
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| matches_query(p, &needle))
        .cloned()
        .collect()
}

fn matches_query(product: &Product, needle: &str) -> bool {
    if product.name.to_lowercase().contains(needle) {
        return true;
    }
    if product.description.to_lowercase().contains(needle) {
        return true;
    }
    if product
        .moods
        .iter()
        .any(|mood| mood.to_lowercase().contains(needle))
    {
        return true;
    }
    // Reverse containment: the whole mood line inside the query.
    needle.contains(&product.mood_line().to_lowercase())
}
