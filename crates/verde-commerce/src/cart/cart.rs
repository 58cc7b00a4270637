//! Cart line items and reducers.

use crate::catalog::Product;
use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A product plus quantity in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product (denormalized snapshot).
    pub product: Product,
    /// Quantity, always positive.
    pub quantity: i64,
}

impl CartItem {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Result<Money, StorefrontError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(StorefrontError::Overflow)
    }
}

/// Add a product to the cart, returning the new item list.
///
/// If a line for the product already exists its quantity goes up by 1,
/// otherwise a new line with quantity 1 is appended. The input list is
/// never mutated.
pub fn add_item(items: &[CartItem], product: &Product) -> Result<Vec<CartItem>, StorefrontError> {
    let mut next = items.to_vec();
    if let Some(existing) = next.iter_mut().find(|i| i.product.id == product.id) {
        let quantity = existing
            .quantity
            .checked_add(1)
            .ok_or(StorefrontError::Overflow)?;
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(StorefrontError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }
        existing.quantity = quantity;
        return Ok(next);
    }
    next.push(CartItem {
        product: product.clone(),
        quantity: 1,
    });
    Ok(next)
}

/// Set a line's quantity exactly, returning the new item list.
///
/// A quantity of zero or below removes the line. Unknown product ids leave
/// the list unchanged.
pub fn update_quantity(
    items: &[CartItem],
    product_id: &ProductId,
    quantity: i64,
) -> Result<Vec<CartItem>, StorefrontError> {
    if quantity <= 0 {
        return Ok(remove_item(items, product_id));
    }
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(StorefrontError::QuantityExceedsLimit(
            quantity,
            MAX_QUANTITY_PER_ITEM,
        ));
    }
    Ok(items
        .iter()
        .map(|item| {
            if &item.product.id == product_id {
                CartItem {
                    product: item.product.clone(),
                    quantity,
                }
            } else {
                item.clone()
            }
        })
        .collect())
}

/// Remove a line from the cart, returning the new item list.
pub fn remove_item(items: &[CartItem], product_id: &ProductId) -> Vec<CartItem> {
    items
        .iter()
        .filter(|i| &i.product.id != product_id)
        .cloned()
        .collect()
}

/// Total price across all lines.
///
/// All lines must share the first line's currency; a mixed cart is a
/// `CurrencyMismatch`, not an arithmetic failure.
pub fn total_price(items: &[CartItem]) -> Result<Money, StorefrontError> {
    let currency = items
        .first()
        .map(|i| i.product.price.currency)
        .unwrap_or(Currency::USD);

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        if item.product.price.currency != currency {
            return Err(StorefrontError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: item.product.price.currency.code().to_string(),
            });
        }
        lines.push(item.line_total()?);
    }

    Money::try_sum(lines.iter(), currency).ok_or(StorefrontError::Overflow)
}

/// Total item count (sum of quantities).
pub fn total_items(items: &[CartItem]) -> i64 {
    items.iter().map(|i| i.quantity).sum()
}
