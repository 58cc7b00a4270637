//! ESG filter engine.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// User-chosen ESG query constraints.
///
/// All predicates fail open: a non-finite threshold or an empty set imposes
/// no constraint. Filtering never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgFilters {
    /// Minimum sustainability score on the UI's 0-100 scale.
    ///
    /// Products store a 0-10 score; this value is divided by 10 at the
    /// comparison. The unit mismatch is intentional and load-bearing:
    /// changing it changes observable filter results.
    pub min_sustainability_score: f64,
    /// Maximum carbon footprint in kg CO2.
    pub max_carbon_footprint_kg: f64,
    /// Maximum water usage in liters.
    pub max_water_usage_liters: f64,
    /// Certification ids the product must match, all of them (AND).
    /// An id matches if any product certification contains it as a
    /// case-insensitive substring ("gots" matches "Global Organic
    /// Textile Standard (GOTS)").
    pub required_certifications: Vec<String>,
    /// Acceptable origin regions (OR). Exact, case-sensitive membership
    /// against the canonical region string.
    pub preferred_regions: Vec<String>,
    /// Minimum supply-chain ethics rating, 1-10.
    pub min_ethics_rating: f64,
}

impl Default for EsgFilters {
    fn default() -> Self {
        Self {
            min_sustainability_score: 0.0,
            max_carbon_footprint_kg: 10.0,
            max_water_usage_liters: 200.0,
            required_certifications: Vec::new(),
            preferred_regions: Vec::new(),
            min_ethics_rating: 1.0,
        }
    }
}

impl EsgFilters {
    /// Create filters with default (unconstraining) values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum sustainability score (0-100 slider value).
    pub fn with_min_sustainability_score(mut self, score: f64) -> Self {
        self.min_sustainability_score = score;
        self
    }

    /// Set the maximum carbon footprint in kg.
    pub fn with_max_carbon_footprint(mut self, kg: f64) -> Self {
        self.max_carbon_footprint_kg = kg;
        self
    }

    /// Set the maximum water usage in liters.
    pub fn with_max_water_usage(mut self, liters: f64) -> Self {
        self.max_water_usage_liters = liters;
        self
    }

    /// Require a certification id (AND semantics across ids).
    pub fn with_required_certification(mut self, id: impl Into<String>) -> Self {
        self.required_certifications.push(id.into());
        self
    }

    /// Add a preferred region (OR semantics across regions).
    pub fn with_preferred_region(mut self, region: impl Into<String>) -> Self {
        self.preferred_regions.push(region.into());
        self
    }

    /// Set the minimum ethics rating.
    pub fn with_min_ethics_rating(mut self, rating: f64) -> Self {
        self.min_ethics_rating = rating;
        self
    }

    /// Reset all fields to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check whether a single product satisfies every predicate.
    pub fn matches(&self, product: &Product) -> bool {
        let esg = &product.esg;

        // UI slider is 0-100, stored score is 0-10.
        if self.min_sustainability_score.is_finite()
            && esg.sustainability_score < self.min_sustainability_score / 10.0
        {
            return false;
        }

        if self.max_carbon_footprint_kg.is_finite()
            && esg.carbon_footprint_kg > self.max_carbon_footprint_kg
        {
            return false;
        }

        if self.max_water_usage_liters.is_finite()
            && esg.water_usage_liters > self.max_water_usage_liters
        {
            return false;
        }

        if self.min_ethics_rating.is_finite()
            && esg.supply_chain.ethics_rating < self.min_ethics_rating
        {
            return false;
        }

        if !self.required_certifications.is_empty() {
            let held: Vec<String> = esg
                .certifications
                .iter()
                .map(|c| c.to_lowercase())
                .collect();
            let all_held = self.required_certifications.iter().all(|required| {
                let required = required.to_lowercase();
                held.iter().any(|c| c.contains(&required))
            });
            if !all_held {
                return false;
            }
        }

        // Regions are canonical strings; matching is exact and case-sensitive,
        // unlike certification ids.
        if !self.preferred_regions.is_empty()
            && !self.preferred_regions.iter().any(|r| r == &esg.region)
        {
            return false;
        }

        true
    }

    /// Filter a product list, preserving input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn demo_products() -> Vec<Product> {
        Catalog::demo().products().to_vec()
    }

    #[test]
    fn test_defaults_pass_everything() {
        let products = demo_products();
        let filtered = EsgFilters::default().apply(&products);
        assert_eq!(filtered.len(), products.len());
        // Order preserved
        for (a, b) in filtered.iter().zip(products.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_sustainability_slider_divided_by_ten() {
        let products = demo_products();
        // Slider value 80 means stored score >= 8.0
        let filters = EsgFilters::default().with_min_sustainability_score(80.0);
        let filtered = filters.apply(&products);
        assert!(filtered
            .iter()
            .all(|p| p.esg.sustainability_score >= 8.0));
        assert!(filtered.len() < products.len());
    }

    #[test]
    fn test_conjunction_flipping_any_predicate_removes() {
        let products = demo_products();
        // Hemp Relaxed Trousers: score 8.9, carbon 1.2, water 80, ethics 8.5,
        // OEKO-TEX, "Gujarat, India".
        let subject = vec![products[2].clone()];

        let passing = EsgFilters::default()
            .with_min_sustainability_score(85.0)
            .with_max_carbon_footprint(2.0)
            .with_max_water_usage(100.0)
            .with_min_ethics_rating(8.0)
            .with_required_certification("oeko-tex")
            .with_preferred_region("Gujarat, India");
        assert_eq!(passing.apply(&subject).len(), 1);

        let cases = [
            passing.clone().with_min_sustainability_score(95.0),
            passing.clone().with_max_carbon_footprint(1.0),
            passing.clone().with_max_water_usage(50.0),
            passing.clone().with_min_ethics_rating(9.0),
            passing.clone().with_required_certification("gots"),
            EsgFilters {
                preferred_regions: vec!["Karnataka, India".to_string()],
                ..passing.clone()
            },
        ];
        for (i, filters) in cases.iter().enumerate() {
            assert!(filters.apply(&subject).is_empty(), "case {} should fail", i);
        }
    }

    #[test]
    fn test_certification_substring_match() {
        let products = demo_products();
        // "gots" is a substring of "Global Organic Textile Standard (GOTS)".
        let filters = EsgFilters::default().with_required_certification("gots");
        let filtered = filters.apply(&products);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Organic Linen Wrap Dress");
    }

    #[test]
    fn test_certifications_are_and_semantics() {
        let products = demo_products();
        let filters = EsgFilters::default()
            .with_required_certification("gots")
            .with_required_certification("fair trade");
        assert_eq!(filters.apply(&products).len(), 1);

        let filters = EsgFilters::default()
            .with_required_certification("gots")
            .with_required_certification("grs");
        assert!(filters.apply(&products).is_empty());
    }

    #[test]
    fn test_region_match_is_exact_and_case_sensitive() {
        let products = demo_products();

        let exact = EsgFilters::default().with_preferred_region("California, USA");
        assert_eq!(exact.apply(&products).len(), 1);

        // Lowercase does not match the canonical region string.
        let lowercase = EsgFilters::default().with_preferred_region("california");
        assert!(lowercase.apply(&products).is_empty());
    }

    #[test]
    fn test_regions_are_or_semantics() {
        let products = demo_products();
        let filters = EsgFilters::default()
            .with_preferred_region("Karnataka, India")
            .with_preferred_region("Gujarat, India");
        assert_eq!(filters.apply(&products).len(), 3);
    }

    #[test]
    fn test_non_finite_thresholds_fail_open() {
        let products = demo_products();
        let filters = EsgFilters {
            min_sustainability_score: f64::NAN,
            max_carbon_footprint_kg: f64::NAN,
            max_water_usage_liters: f64::NAN,
            min_ethics_rating: f64::NAN,
            ..EsgFilters::default()
        };
        assert_eq!(filters.apply(&products).len(), products.len());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filters = EsgFilters::default()
            .with_min_sustainability_score(90.0)
            .with_required_certification("gots");
        filters.reset();
        assert_eq!(filters, EsgFilters::default());
    }
}
