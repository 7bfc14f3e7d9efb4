//! # Cart
//!
//! The bag: an ordered list of priced line items with a derived total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action               Core Call                  Cart Change         │
//! │  ─────────               ─────────                  ───────────         │
//! │                                                                         │
//! │  Shop "Add to Bag" ────► add_item(from_product) ──► items.push(item)   │
//! │                                                                         │
//! │  Studio "Add to Bag" ──► add_item(configured) ────► items.push(item)   │
//! │                                                                         │
//! │  "Remove Item" ────────► remove_item(cart_id) ────► items.remove(i)    │
//! │                                                     (absent id: no-op)  │
//! │                                                                         │
//! │  Bag total ────────────► total() ─────────────────► (read only)        │
//! │                                                                         │
//! │  NOTE: the total is summed on every read and never stored.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::pricing::ItemDraft;
use crate::types::StyleToken;

// =============================================================================
// Cart Id
// =============================================================================

/// Identifier of one entry in the bag (UUID v4).
///
/// Two additions of the same product get two distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartId(String);

impl CartId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        CartId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CartId {
    fn from(id: String) -> Self {
        CartId(id)
    }
}

impl From<&str> for CartId {
    fn from(id: &str) -> Self {
        CartId(id.to_string())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// An entry in the bag.
///
/// ## Snapshot Pattern
/// Name, price and details are frozen when the item is added; nothing
/// mutates a line item afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub cart_id: CartId,
    pub name: String,
    pub price: Money,
    pub details: String,
    pub swatch: StyleToken,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    fn new(cart_id: CartId, draft: ItemDraft) -> Self {
        LineItem {
            cart_id,
            name: draft.name,
            price: draft.price,
            details: draft.details,
            swatch: draft.swatch,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping bag.
///
/// ## Invariants
/// - Insertion order is display order and summation order
/// - `cart_id`s are unique
/// - `total() == Σ item.price`, zero when empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a draft under a fresh id and returns that id.
    ///
    /// The new item is always last; length grows by exactly one.
    ///
    /// ## Example
    /// ```rust
    /// use crexy_core::cart::Cart;
    /// use crexy_core::catalog::catalog;
    /// use crexy_core::pricing::ItemDraft;
    ///
    /// let mut cart = Cart::new();
    /// let tote = ItemDraft::from_product(catalog().product(3).unwrap());
    /// let id = cart.add_item(tote);
    ///
    /// assert_eq!(cart.items().last().unwrap().cart_id, id);
    /// ```
    pub fn add_item(&mut self, draft: ItemDraft) -> CartId {
        let cart_id = CartId::generate();
        self.items.push(LineItem::new(cart_id.clone(), draft));
        cart_id
    }

    /// Removes the entry with `cart_id`, returning it.
    ///
    /// An unknown id leaves the cart untouched and returns `None`; that is
    /// not an error.
    pub fn remove_item(&mut self, cart_id: &CartId) -> Option<LineItem> {
        let index = self.items.iter().position(|i| &i.cart_id == cart_id)?;
        Some(self.items.remove(index))
    }

    /// Sum of every item's price.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.price).sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, cart_id: &CartId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.cart_id == cart_id)
    }

    /// Number of entries (the navbar badge).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: i64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            price: Money::from_major(price),
            details: String::new(),
            swatch: StyleToken::Neutral,
        }
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(CartTotals::from(&cart).item_count, 0);
    }

    #[test]
    fn test_add_appends_last() {
        let mut cart = Cart::new();
        cart.add_item(draft("Heritage Wallet", 45));
        let id = cart.add_item(draft("Signature Tote", 180));

        assert_eq!(cart.item_count(), 2);
        let last = cart.items().last().unwrap();
        assert_eq!(last.cart_id, id);
        assert_eq!(last.name, "Signature Tote");
    }

    #[test]
    fn test_total_add_add_remove_scenario() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Money::zero());

        let first = cart.add_item(draft("Heritage Wallet", 45));
        cart.add_item(draft("Signature Tote", 180));
        assert_eq!(cart.total(), Money::from_major(225));

        let removed = cart.remove_item(&first).unwrap();
        assert_eq!(removed.price, Money::from_major(45));
        assert_eq!(cart.total(), Money::from_major(180));
    }

    #[test]
    fn test_total_equals_sum_of_prices() {
        let mut cart = Cart::new();
        for price in [0, 10, 35, 120, 145] {
            cart.add_item(draft("item", price));
        }
        let expected: i64 = cart.items().iter().map(|i| i.price.cents()).sum();
        assert_eq!(cart.total().cents(), expected);
        assert_eq!(cart.total(), Money::from_major(310));
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let mut cart = Cart::new();
        cart.add_item(draft("Heritage Wallet", 45));
        let before = cart.clone();

        let id = cart.add_item(draft("Crescent Clutch", 85));
        cart.remove_item(&id);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(draft("Heritage Wallet", 45));
        let before = cart.clone();

        assert!(cart.remove_item(&CartId::from("not-in-cart")).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_same_item_twice_gets_distinct_ids() {
        let mut cart = Cart::new();
        let a = cart.add_item(draft("Heritage Wallet", 45));
        let b = cart.add_item(draft("Heritage Wallet", 45));

        assert_ne!(a, b);
        cart.remove_item(&a);
        assert_eq!(cart.item_count(), 1);
        assert!(cart.get(&b).is_some());
        assert!(cart.get(&a).is_none());
    }

    #[test]
    fn test_cart_id_serializes_as_plain_string() {
        let id = CartId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        assert_eq!(id.to_string(), "abc");
        assert_eq!(id.as_str(), "abc");
    }
}
