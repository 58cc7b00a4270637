//! Sort engine.

use crate::catalog::Product;
use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};

/// Sort options for result sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Keep the order produced by the search/filter stage.
    #[default]
    Relevance,
    /// Descending by transparency index overall score.
    EsgScore,
    /// Descending by stored sustainability score.
    Sustainability,
    /// Ascending by carbon footprint.
    CarbonLow,
    /// Ascending by water usage.
    WaterLow,
    /// Ascending by price.
    PriceLow,
    /// Descending by price.
    PriceHigh,
}

impl SortKey {
    /// Parse a sort key from its wire form.
    ///
    /// Unknown keys are an error, not a silent fallback to relevance.
    /// Callers that want the old fallback behavior opt in with
    /// `.unwrap_or_default()`.
    pub fn parse(s: &str) -> Result<Self, StorefrontError> {
        match s {
            "relevance" => Ok(SortKey::Relevance),
            "esg-score" => Ok(SortKey::EsgScore),
            "sustainability" => Ok(SortKey::Sustainability),
            "carbon-low" => Ok(SortKey::CarbonLow),
            "water-low" => Ok(SortKey::WaterLow),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            _ => Err(StorefrontError::UnknownSortKey(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::EsgScore => "esg-score",
            SortKey::Sustainability => "sustainability",
            SortKey::CarbonLow => "carbon-low",
            SortKey::WaterLow => "water-low",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::EsgScore => "Transparency Score",
            SortKey::Sustainability => "Most Sustainable",
            SortKey::CarbonLow => "Lowest Carbon",
            SortKey::WaterLow => "Lowest Water Use",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
        }
    }
}

/// Sort products into a fresh vector.
///
/// The sort is stable: products with equal keys keep their relative input
/// order. The input slice is never reordered, so callers can keep reusing
/// the same catalog reference across renders.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Relevance => {}
        SortKey::EsgScore => {
            sorted.sort_by(|a, b| b.transparency.overall.cmp(&a.transparency.overall));
        }
        SortKey::Sustainability => {
            sorted.sort_by(|a, b| {
                b.esg
                    .sustainability_score
                    .total_cmp(&a.esg.sustainability_score)
            });
        }
        SortKey::CarbonLow => {
            sorted.sort_by(|a, b| {
                a.esg
                    .carbon_footprint_kg
                    .total_cmp(&b.esg.carbon_footprint_kg)
            });
        }
        SortKey::WaterLow => {
            sorted.sort_by(|a, b| {
                a.esg
                    .water_usage_liters
                    .total_cmp(&b.esg.water_usage_liters)
            });
        }
        SortKey::PriceLow => {
            sorted.sort_by_key(|p| p.price.amount_cents);
        }
        SortKey::PriceHigh => {
            sorted.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents));
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    fn demo_products() -> Vec<Product> {
        Catalog::demo().products().to_vec()
    }

    #[test]
    fn test_parse_known_keys() {
        for key in [
            SortKey::Relevance,
            SortKey::EsgScore,
            SortKey::Sustainability,
            SortKey::CarbonLow,
            SortKey::WaterLow,
            SortKey::PriceLow,
            SortKey::PriceHigh,
        ] {
            assert_eq!(SortKey::parse(key.as_str()).unwrap(), key);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(SortKey::parse("esg_score").is_err());
        assert!(SortKey::parse("").is_err());
        assert!(SortKey::parse("Relevance").is_err());
    }

    #[test]
    fn test_relevance_is_identity() {
        let products = demo_products();
        let sorted = sort_products(&products, SortKey::Relevance);
        for (a, b) in sorted.iter().zip(products.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_esg_score_descending() {
        let sorted = sort_products(&demo_products(), SortKey::EsgScore);
        let overall: Vec<u8> = sorted.iter().map(|p| p.transparency.overall).collect();
        assert_eq!(overall, vec![92, 88, 85, 78, 70, 61]);
    }

    #[test]
    fn test_carbon_ascending() {
        let sorted = sort_products(&demo_products(), SortKey::CarbonLow);
        let carbon: Vec<f64> = sorted.iter().map(|p| p.esg.carbon_footprint_kg).collect();
        for pair in carbon.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_water_ascending() {
        let sorted = sort_products(&demo_products(), SortKey::WaterLow);
        let water: Vec<f64> = sorted.iter().map(|p| p.esg.water_usage_liters).collect();
        for pair in water.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(sorted.first().unwrap().name, "Vegan Leather Tote");
    }

    #[test]
    fn test_sustainability_descending() {
        let sorted = sort_products(&demo_products(), SortKey::Sustainability);
        let scores: Vec<f64> = sorted.iter().map(|p| p.esg.sustainability_score).collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert_eq!(sorted.first().unwrap().name, "Organic Linen Wrap Dress");
    }

    #[test]
    fn test_price_both_directions() {
        let low = sort_products(&demo_products(), SortKey::PriceLow);
        let high = sort_products(&demo_products(), SortKey::PriceHigh);
        assert_eq!(low.first().unwrap().name, "Bamboo Jersey Top");
        assert_eq!(high.first().unwrap().name, "Classic Silk Skirt");
    }

    #[test]
    fn test_stability_on_equal_keys() {
        let template = demo_products()[0].clone();
        let mut products = Vec::new();
        for (i, id) in ["first", "second", "third"].iter().enumerate() {
            let mut p = template.clone();
            p.id = ProductId::new(*id);
            p.transparency.overall = 80;
            p.price = crate::money::Money::new(1000 + i as i64, crate::money::Currency::USD);
            products.push(p);
        }

        let sorted = sort_products(&products, SortKey::EsgScore);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let products = demo_products();
        let before: Vec<ProductId> = products.iter().map(|p| p.id.clone()).collect();
        let _ = sort_products(&products, SortKey::PriceHigh);
        let after: Vec<ProductId> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);
    }
}
