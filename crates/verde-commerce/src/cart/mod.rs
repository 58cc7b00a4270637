//! Cart and wishlist state, expressed as pure reducers.
//!
//! State containers are owned by the application root; every mutation is a
//! function from the current item list to a new one. Nothing here touches
//! shared or global state.

mod cart;
mod wishlist;

pub use cart::{
    add_item, remove_item, total_items, total_price, update_quantity, CartItem,
    MAX_QUANTITY_PER_ITEM,
};
pub use wishlist::{group_by_mood, MoodGroup, WishlistItem};
