//! Wishlist items and mood grouping.

use crate::catalog::Product;
use crate::ids::WishlistItemId;
use serde::{Deserialize, Serialize};

/// A saved product with the mood it was saved under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Unique item identifier.
    pub id: WishlistItemId,
    /// The saved product.
    pub product: Product,
    /// Mood the item was saved under.
    pub mood: String,
    /// Optional occasion (e.g., "office party").
    pub occasion: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Unix timestamp when the item was added.
    pub added_at: i64,
}

impl WishlistItem {
    /// Create a wishlist item for a product under a mood.
    pub fn new(product: Product, mood: impl Into<String>) -> Self {
        Self {
            id: WishlistItemId::generate(),
            product,
            mood: mood.into(),
            occasion: None,
            notes: None,
            added_at: current_timestamp(),
        }
    }

    /// Attach an occasion.
    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    /// Attach notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Wishlist items grouped under one mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodGroup {
    /// The mood label.
    pub mood: String,
    /// Items saved under it, in insertion order.
    pub items: Vec<WishlistItem>,
}

/// Partition wishlist items by mood.
///
/// Groups appear in the order their mood was first seen; items keep their
/// insertion order within each group.
pub fn group_by_mood(items: &[WishlistItem]) -> Vec<MoodGroup> {
    let mut groups: Vec<MoodGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.mood == item.mood) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(MoodGroup {
                mood: item.mood.clone(),
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_group_by_mood_preserves_order() {
        let products = Catalog::demo().products().to_vec();
        let items = vec![
            WishlistItem::new(products[0].clone(), "elegant"),
            WishlistItem::new(products[1].clone(), "bold"),
            WishlistItem::new(products[4].clone(), "elegant"),
            WishlistItem::new(products[5].clone(), "bold"),
        ];

        let groups = group_by_mood(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].mood, "elegant");
        assert_eq!(groups[1].mood, "bold");
        assert_eq!(groups[0].items[0].id, items[0].id);
        assert_eq!(groups[0].items[1].id, items[2].id);
        assert_eq!(groups[1].items[0].id, items[1].id);
        assert_eq!(groups[1].items[1].id, items[3].id);
    }

    #[test]
    fn test_group_by_mood_empty() {
        assert!(group_by_mood(&[]).is_empty());
    }

    #[test]
    fn test_item_builder() {
        let product = Catalog::demo().products()[0].clone();
        let item = WishlistItem::new(product, "confident")
            .with_occasion("office party")
            .with_notes("pair with the tote");
        assert_eq!(item.mood, "confident");
        assert_eq!(item.occasion.as_deref(), Some("office party"));
        assert!(item.added_at > 0);
    }
}
