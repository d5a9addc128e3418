//! The in-memory merch cart.
//!
//! Cart state lives for one session only: it starts empty, grows and
//! shrinks with add/remove requests, and is gone when the process ends.

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// How long the "added to cart" toast stays fully visible.
pub const NOTIFICATION_VISIBLE: Duration = Duration::from_millis(3000);
/// Length of the toast's enter and exit transitions, each.
pub const NOTIFICATION_TRANSITION: Duration = Duration::from_millis(300);

/// Session-unique token identifying one cart line.
///
/// Derived from the wall clock at add time (millisecond resolution) and
/// bumped past the previously issued id, so ids are strictly increasing
/// within a session. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line in the cart.
///
/// `quantity` is always 1 at creation and is never summed into the cart
/// count: the count the site displays is the number of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    /// Price as the display string from the product card, e.g. "$25.00".
    pub price: String,
    pub image: String,
    pub quantity: u32,
}

/// Ordered cart lines; insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    items: Vec<CartItem>,
    last_id: i64,
}

impl CartState {
    pub fn new() -> CartState {
        CartState::default()
    }

    fn next_id(&mut self) -> ItemId {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        ItemId(self.last_id)
    }

    /// Append a new line with quantity 1 and a fresh id.
    ///
    /// Always succeeds and never merges: adding the same product twice
    /// yields two distinct lines.
    pub fn add_item(&mut self, name: &str, price: &str, image: &str) -> CartItem {
        let item = CartItem {
            id: self.next_id(),
            name: name.to_string(),
            price: price.to_string(),
            image: image.to_string(),
            quantity: 1,
        };
        self.items.push(item.clone());
        item
    }

    /// Remove the line with the given id.
    ///
    /// An unknown id is a silent no-op, not an error; returns whether a
    /// line was actually removed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Number of lines in the cart. Not a quantity sum.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Lines in insertion order, for display.
    pub fn lines(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- add / remove ---

    #[test]
    fn add_then_remove_restores_the_sequence() {
        let mut cart = CartState::new();
        cart.add_item("Tour Tee", "$25.00", "tee.png");
        let snapshot = cart.lines().to_vec();

        let added = cart.add_item("2025 Tour Poster", "$15.00", "poster.png");
        assert!(cart.remove_item(added.id));

        assert_eq!(cart.lines(), snapshot.as_slice());
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut cart = CartState::new();
        let kept = cart.add_item("Tour Tee", "$25.00", "tee.png");
        let gone = cart.add_item("Logo Snapback", "$30.00", "snapback.png");
        cart.remove_item(gone.id);

        assert!(!cart.remove_item(gone.id));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.lines()[0].id, kept.id);
    }

    #[test]
    fn remove_keeps_insertion_order() {
        let mut cart = CartState::new();
        cart.add_item("Tour Tee", "$25.00", "tee.png");
        let middle = cart.add_item("Logo Snapback", "$30.00", "snapback.png");
        cart.add_item("Live Album Vinyl", "$35.00", "vinyl.png");

        cart.remove_item(middle.id);

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Tour Tee", "Live Album Vinyl"]);
    }

    // --- line semantics ---

    #[test]
    fn duplicate_products_become_distinct_lines() {
        let mut cart = CartState::new();
        let first = cart.add_item("Tour Tee", "$25.00", "tee.png");
        let second = cart.add_item("Tour Tee", "$25.00", "tee.png");

        assert_ne!(first.id, second.id);
        assert_eq!(cart.item_count(), 2);
        // quantity stays 1 per line; the count is lines, not a sum
        assert!(cart.lines().iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let mut cart = CartState::new();
        let ids: Vec<ItemId> = (0..10)
            .map(|_| cart.add_item("Sticker Pack", "$8.00", "stickers.png").id)
            .collect();

        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn empty_cart_scenario() {
        let mut cart = CartState::new();
        assert!(cart.is_empty());

        let added = cart.add_item("Tour Tee", "$25.00", "tee.png");
        assert_eq!(cart.item_count(), 1);

        let wrong_id = ItemId(0);
        cart.remove_item(wrong_id);
        assert_eq!(cart.item_count(), 1);

        cart.remove_item(added.id);
        assert_eq!(cart.item_count(), 0);
    }
}
