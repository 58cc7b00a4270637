//! Product and ESG metadata types.

use crate::catalog::TransparencyIndex;
use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Garment category.
///
/// A closed enumeration: unknown values coming off the wire are rejected
/// rather than coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Jackets,
    Skirts,
    Accessories,
    Shoes,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Dresses => "dresses",
            Category::Jackets => "jackets",
            Category::Skirts => "skirts",
            Category::Accessories => "accessories",
            Category::Shoes => "shoes",
        }
    }

    /// Parse a category from its wire form.
    ///
    /// Unknown values are an error, not coerced to a default.
    pub fn parse(s: &str) -> Result<Self, StorefrontError> {
        match s.to_lowercase().as_str() {
            "tops" => Ok(Category::Tops),
            "bottoms" => Ok(Category::Bottoms),
            "dresses" => Ok(Category::Dresses),
            "jackets" => Ok(Category::Jackets),
            "skirts" => Ok(Category::Skirts),
            "accessories" => Ok(Category::Accessories),
            "shoes" => Ok(Category::Shoes),
            _ => Err(StorefrontError::UnknownCategory(s.to_string())),
        }
    }
}

/// Supply chain metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChain {
    /// Ethics rating, 1-10 continuous.
    pub ethics_rating: f64,
}

/// Environmental and social metadata embedded in every product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgMetadata {
    /// Carbon footprint in kg CO2 (>= 0).
    pub carbon_footprint_kg: f64,
    /// Water usage in liters (>= 0).
    pub water_usage_liters: f64,
    /// Sustainability score, 0-10. Note: UI sliders work on a 0-100 scale.
    pub sustainability_score: f64,
    /// Canonical origin string (e.g., "Karnataka, India").
    pub region: String,
    /// Material composition.
    pub materials: Vec<String>,
    /// Full certification names (e.g., "Global Organic Textile Standard (GOTS)").
    pub certifications: Vec<String>,
    /// Supply chain metadata.
    pub supply_chain: SupplyChain,
}

/// A product in the catalog.
///
/// ESG metadata and the transparency index are always present: a product
/// cannot reach the filter pipeline with either missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Price.
    pub price: Money,
    /// Garment category.
    pub category: Category,
    /// Ordered mood tags; the first is the primary mood. Never empty.
    pub moods: Vec<String>,
    /// ESG metadata.
    pub esg: EsgMetadata,
    /// Transparency index. `overall` is stored data, not derived.
    pub transparency: TransparencyIndex,
}

impl Product {
    /// The primary mood tag (first in the list).
    pub fn primary_mood(&self) -> &str {
        self.moods.first().map(String::as_str).unwrap_or("")
    }

    /// All mood tags joined with spaces, used by the search matcher.
    pub fn mood_line(&self) -> String {
        self.moods.join(" ")
    }
}
