//! # Pricing & Selection
//!
//! The configurator's working state and the pure functions that price it.
//!
//! ## Configurator Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       The Studio (configurator)                         │
//! │                                                                         │
//! │  01. Silhouette ──► Selection::with_category(cat)                      │
//! │  02. Material ────► Selection::with_material(mat)                      │
//! │  03. Initials ────► Selection::with_initials(raw)                      │
//! │                          │   (normalize_initials: max 3 chars)          │
//! │                          ▼                                              │
//! │  Preview price ───► compute_price(category, material)                  │
//! │                          │                                              │
//! │                          ▼                                              │
//! │  "Add to Bag" ────► build_configured_item(selection) ──► ItemDraft     │
//! │                                                              │          │
//! │                                                              ▼          │
//! │                                                   Cart::add_item        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Catalog, CatalogProduct, Category, Material};
use crate::money::Money;
use crate::types::StyleToken;
use crate::MAX_INITIALS;

// =============================================================================
// Pure Pricing Functions
// =============================================================================

/// Price of a configured item: category base price plus material surcharge.
///
/// ## Example
/// ```rust
/// use crexy_core::catalog::catalog;
/// use crexy_core::money::Money;
/// use crexy_core::pricing::compute_price;
///
/// let wallets = catalog().category("wallet").unwrap();
/// let apple = catalog().material("apple").unwrap();
/// assert_eq!(compute_price(wallets, apple), Money::from_major(60));
/// ```
#[inline]
pub fn compute_price(category: &Category, material: &Material) -> Money {
    category.base_price + material.price_delta
}

/// Keeps the first three characters of `raw`.
///
/// No case change and no character-set checks; counts Unicode scalar values,
/// so multi-byte characters are never split.
///
/// ## Example
/// ```rust
/// use crexy_core::pricing::normalize_initials;
///
/// assert_eq!(normalize_initials("ABCD"), "ABC");
/// assert_eq!(normalize_initials("c.n"), "c.n");
/// assert_eq!(normalize_initials(""), "");
/// ```
pub fn normalize_initials(raw: &str) -> String {
    raw.chars().take(MAX_INITIALS).collect()
}

/// Snapshots a selection into an item ready for the bag.
///
/// ```text
/// name    = "Custom " + category.name
/// details = material.name + " | Initials: " + (initials or "None")
/// price   = compute_price(category, material)
/// swatch  = material.swatch
/// ```
pub fn build_configured_item(selection: &Selection) -> ItemDraft {
    let initials = normalize_initials(&selection.initials);
    let initials = if initials.is_empty() {
        "None"
    } else {
        initials.as_str()
    };

    ItemDraft {
        name: format!("Custom {}", selection.category.name),
        price: compute_price(&selection.category, &selection.material),
        details: format!("{} | Initials: {}", selection.material.name, initials),
        swatch: selection.material.swatch,
    }
}

// =============================================================================
// Selection
// =============================================================================

/// The configurator's in-progress custom item.
///
/// ## Replace, Don't Patch
/// Every `with_*` method consumes the selection and returns a new one, so a
/// selection is never observed half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub category: Category,
    pub material: Material,
    /// Personalisation, at most three characters.
    pub initials: String,
}

impl Selection {
    /// Starting selection: first category, first material, no initials.
    pub fn new(catalog: &Catalog) -> Self {
        Selection {
            category: catalog.default_category().clone(),
            material: catalog.default_material().clone(),
            initials: String::new(),
        }
    }

    pub fn with_category(self, category: Category) -> Self {
        Selection { category, ..self }
    }

    pub fn with_material(self, material: Material) -> Self {
        Selection { material, ..self }
    }

    /// Replaces the initials, normalised to at most three characters.
    pub fn with_initials(self, raw: &str) -> Self {
        Selection {
            initials: normalize_initials(raw),
            ..self
        }
    }

    /// Live price shown under the preview.
    pub fn price(&self) -> Money {
        compute_price(&self.category, &self.material)
    }
}

// =============================================================================
// Item Draft
// =============================================================================

/// A priced item that has not been put in the bag yet.
///
/// The cart stamps an id and a timestamp on it when it becomes a
/// [`LineItem`](crate::cart::LineItem).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub price: Money,
    pub details: String,
    pub swatch: StyleToken,
}

impl ItemDraft {
    /// Snapshot of a ready-made shop product; details show its material.
    pub fn from_product(product: &CatalogProduct) -> Self {
        ItemDraft {
            name: product.name.clone(),
            price: product.price,
            details: product.material_label.clone(),
            swatch: product.swatch,
        }
    }
}

impl From<&Selection> for ItemDraft {
    fn from(selection: &Selection) -> Self {
        build_configured_item(selection)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
