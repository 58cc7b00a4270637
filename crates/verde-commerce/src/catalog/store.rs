//! Read-only catalog store.

use crate::catalog::{
    Category, EsgMetadata, Product, SupplyChain, TransparencyIndex, TransparencyScore,
};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// The immutable product list the query pipeline runs over.
///
/// The catalog is read-only within the pipeline; cart and wishlist state
/// live elsewhere and never mutate it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The demo catalog used before the external store has loaded and by
    /// the end-to-end tests.
    pub fn demo() -> Self {
        Self::new(vec![
            demo_product(
                "prod-linen-dress",
                "Organic Linen Wrap Dress",
                "Breathable wrap dress in certified organic linen.",
                89.00,
                Category::Dresses,
                &["elegant", "confident"],
                EsgMetadata {
                    carbon_footprint_kg: 1.8,
                    water_usage_liters: 120.0,
                    sustainability_score: 9.2,
                    region: "Karnataka, India".to_string(),
                    materials: vec!["organic linen".to_string()],
                    certifications: vec![
                        "Global Organic Textile Standard (GOTS)".to_string(),
                        "Fair Trade Certified".to_string(),
                    ],
                    supply_chain: SupplyChain { ethics_rating: 9.0 },
                },
                TransparencyIndex {
                    overall: 92,
                    carbon: TransparencyScore::new(94, true),
                    water: TransparencyScore::new(90, true),
                    ethics: TransparencyScore::new(95, true),
                    region: TransparencyScore::new(88, true),
                },
            ),
            demo_product(
                "prod-denim-jacket",
                "Recycled Denim Jacket",
                "Boxy trucker jacket cut from post-consumer denim.",
                120.00,
                Category::Jackets,
                &["bold", "casual"],
                EsgMetadata {
                    carbon_footprint_kg: 2.4,
                    water_usage_liters: 150.0,
                    sustainability_score: 8.6,
                    region: "California, USA".to_string(),
                    materials: vec!["recycled denim".to_string(), "organic cotton".to_string()],
                    certifications: vec!["Global Recycled Standard (GRS)".to_string()],
                    supply_chain: SupplyChain { ethics_rating: 8.0 },
                },
                TransparencyIndex {
                    overall: 88,
                    carbon: TransparencyScore::new(85, true),
                    water: TransparencyScore::new(82, false),
                    ethics: TransparencyScore::new(90, true),
                    region: TransparencyScore::new(93, true),
                },
            ),
            demo_product(
                "prod-hemp-trousers",
                "Hemp Relaxed Trousers",
                "Relaxed-fit trousers woven from rain-fed hemp.",
                74.50,
                Category::Bottoms,
                &["calm", "casual"],
                EsgMetadata {
                    carbon_footprint_kg: 1.2,
                    water_usage_liters: 80.0,
                    sustainability_score: 8.9,
                    region: "Gujarat, India".to_string(),
                    materials: vec!["hemp".to_string()],
                    certifications: vec!["OEKO-TEX Standard 100".to_string()],
                    supply_chain: SupplyChain { ethics_rating: 8.5 },
                },
                TransparencyIndex {
                    overall: 85,
                    carbon: TransparencyScore::new(88, true),
                    water: TransparencyScore::new(91, true),
                    ethics: TransparencyScore::new(80, false),
                    region: TransparencyScore::new(84, true),
                },
            ),
            demo_product(
                "prod-bamboo-top",
                "Bamboo Jersey Top",
                "Soft everyday tee in closed-loop bamboo jersey.",
                38.00,
                Category::Tops,
                &["fresh", "playful"],
                EsgMetadata {
                    carbon_footprint_kg: 2.9,
                    water_usage_liters: 60.0,
                    sustainability_score: 8.4,
                    region: "Zhejiang, China".to_string(),
                    materials: vec!["bamboo viscose".to_string()],
                    certifications: vec!["OEKO-TEX Standard 100".to_string()],
                    supply_chain: SupplyChain { ethics_rating: 7.0 },
                },
                TransparencyIndex {
                    overall: 78,
                    carbon: TransparencyScore::new(75, false),
                    water: TransparencyScore::new(85, true),
                    ethics: TransparencyScore::new(72, false),
                    region: TransparencyScore::new(80, true),
                },
            ),
            demo_product(
                "prod-silk-skirt",
                "Classic Silk Skirt",
                "Bias-cut midi skirt in mulberry silk.",
                150.00,
                Category::Skirts,
                &["elegant", "romantic"],
                EsgMetadata {
                    carbon_footprint_kg: 4.5,
                    water_usage_liters: 190.0,
                    sustainability_score: 6.5,
                    region: "Lombardy, Italy".to_string(),
                    materials: vec!["mulberry silk".to_string()],
                    certifications: vec![],
                    supply_chain: SupplyChain { ethics_rating: 6.0 },
                },
                TransparencyIndex {
                    overall: 61,
                    carbon: TransparencyScore::new(55, false),
                    water: TransparencyScore::new(60, false),
                    ethics: TransparencyScore::new(65, false),
                    region: TransparencyScore::new(70, true),
                },
            ),
            demo_product(
                "prod-vegan-tote",
                "Vegan Leather Tote",
                "Structured tote in cactus-based vegan leather.",
                95.00,
                Category::Accessories,
                &["confident", "bold"],
                EsgMetadata {
                    carbon_footprint_kg: 3.1,
                    water_usage_liters: 40.0,
                    sustainability_score: 7.8,
                    region: "Karnataka, India".to_string(),
                    materials: vec!["cactus leather".to_string(), "recycled polyester".to_string()],
                    certifications: vec!["PETA-Approved Vegan".to_string()],
                    supply_chain: SupplyChain { ethics_rating: 7.5 },
                },
                TransparencyIndex {
                    overall: 70,
                    carbon: TransparencyScore::new(68, false),
                    water: TransparencyScore::new(78, true),
                    ethics: TransparencyScore::new(66, false),
                    region: TransparencyScore::new(72, true),
                },
            ),
        ])
    }
}

fn demo_product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: Category,
    moods: &[&str],
    esg: EsgMetadata,
    transparency: TransparencyIndex,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_decimal(price, Currency::USD),
        category,
        moods: moods.iter().map(|m| m.to_string()).collect(),
        esg,
        transparency,
    }
}
