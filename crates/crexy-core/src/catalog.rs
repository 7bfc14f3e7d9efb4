//! # Catalog
//!
//! The fixed, read-only set of materials, configurator categories and shop
//! products.
//!
//! ## Catalog Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Catalog                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Material     │   │    Category     │   │ CatalogProduct  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id "apple"     │   │  id "wallet"    │   │  id 1           │       │
//! │  │  price_delta    │   │  base_price     │   │  price          │       │
//! │  │  impact_label   │   │  icon           │   │  category label │       │
//! │  │  swatch         │   │  note           │   │  swatch         │       │
//! │  └────────┬────────┘   └────────┬────────┘   └────────┬────────┘       │
//! │           └──── configurator ───┘                     │                 │
//! │                 (pricing.rs)                  shop tabs (filter)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configurator categories ("Wallets", "Handbags", "Pet Collars", ...) and
//! shop category labels ("Wallets", "Bags", "Belts") are separate
//! vocabularies. A product's `category` is a plain label, matched verbatim
//! by [`filter_by_category`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{IconToken, StyleToken};
use crate::validation::{validate_identifier, validate_price, validate_unique};

/// Filter label that matches every shop product.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Tabs offered above the shop grid, in display order.
pub const SHOP_FILTER_TABS: [&str; 4] = [ALL_CATEGORIES_LABEL, "Wallets", "Bags", "Belts"];

// =============================================================================
// Records
// =============================================================================

/// A bio-material the configurator can build with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Surcharge on top of the category's base price.
    pub price_delta: Money,
    /// Environmental impact blurb, e.g. "-35% CO2".
    pub impact_label: String,
    pub swatch: StyleToken,
}

/// A configurator silhouette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub base_price: Money,
    pub icon: IconToken,
    /// Badge text, e.g. "Custom Only".
    pub note: Option<String>,
}

/// A ready-made product in the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: u32,
    pub name: String,
    pub price: Money,
    /// Shop tab label this product is listed under.
    pub category: String,
    /// Short material name shown under the product name.
    pub material_label: String,
    pub swatch: StyleToken,
    /// Placeholder artwork code.
    pub image_code: String,
}

// =============================================================================
// Catalog
// =============================================================================

/// Validated catalog.
///
/// ## Invariants
/// - At least one material and one category (the configurator starts on
///   the first of each)
/// - Ids are non-empty and unique per record kind
/// - Every price is non-negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    materials: Vec<Material>,
    categories: Vec<Category>,
    products: Vec<CatalogProduct>,
}

impl Catalog {
    /// Builds a catalog, checking every invariant listed on the type.
    pub fn new(
        materials: Vec<Material>,
        categories: Vec<Category>,
        products: Vec<CatalogProduct>,
    ) -> CoreResult<Self> {
        if materials.is_empty() {
            return Err(ValidationError::Required {
                field: "materials".to_string(),
            }
            .into());
        }
        if categories.is_empty() {
            return Err(ValidationError::Required {
                field: "categories".to_string(),
            }
            .into());
        }

        for material in &materials {
            validate_identifier("material id", &material.id)?;
            validate_price("material price delta", material.price_delta)?;
        }
        validate_unique("material id", materials.iter().map(|m| m.id.as_str()))?;

        for category in &categories {
            validate_identifier("category id", &category.id)?;
            validate_price("category base price", category.base_price)?;
        }
        validate_unique("category id", categories.iter().map(|c| c.id.as_str()))?;

        for product in &products {
            validate_price("product price", product.price)?;
        }
        validate_unique("product id", products.iter().map(|p| p.id))?;

        Ok(Catalog {
            materials,
            categories,
            products,
        })
    }

    /// The Crexy&Nilo capsule catalog.
    pub fn builtin() -> Self {
        Catalog {
            materials: builtin_materials(),
            categories: builtin_categories(),
            products: builtin_products(),
        }
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    /// Looks up a material by id.
    pub fn material(&self, id: &str) -> CoreResult<&Material> {
        self.materials
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CoreError::MaterialNotFound(id.to_string()))
    }

    /// Looks up a configurator category by id.
    pub fn category(&self, id: &str) -> CoreResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::CategoryNotFound(id.to_string()))
    }

    /// Looks up a shop product by id.
    pub fn product(&self, id: u32) -> CoreResult<&CatalogProduct> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// Category a fresh configurator session starts on.
    pub fn default_category(&self) -> &Category {
        &self.categories[0]
    }

    /// Material a fresh configurator session starts on.
    pub fn default_material(&self) -> &Material {
        &self.materials[0]
    }

    /// Shop products listed under `label`; see [`filter_by_category`].
    pub fn products_in(&self, label: &str) -> Vec<&CatalogProduct> {
        filter_by_category(&self.products, label)
    }
}

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// The process-wide built-in catalog.
///
/// Built on first use and never reassigned.
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}

// =============================================================================
// Filtering
// =============================================================================

/// Shop products whose category equals `label`.
///
/// `"All"` returns every product. Relative order is kept, and a label no
/// product carries simply yields an empty list.
///
/// ## Example
/// ```rust
/// use crexy_core::catalog::{catalog, filter_by_category};
///
/// let wallets = filter_by_category(catalog().products(), "Wallets");
/// assert!(wallets.iter().all(|p| p.category == "Wallets"));
///
/// assert!(filter_by_category(catalog().products(), "Hats").is_empty());
/// ```
pub fn filter_by_category<'a>(products: &'a [CatalogProduct], label: &str) -> Vec<&'a CatalogProduct> {
    if label == ALL_CATEGORIES_LABEL {
        return products.iter().collect();
    }

    products.iter().filter(|p| p.category == label).collect()
}

// =============================================================================
// Built-in Data
// =============================================================================

fn material(
    id: &str,
    name: &str,
    description: &str,
    price_delta: i64,
    impact_label: &str,
    swatch: StyleToken,
) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_delta: Money::from_major(price_delta),
        impact_label: impact_label.to_string(),
        swatch,
    }
}

fn category(id: &str, name: &str, base_price: i64, icon: IconToken, note: Option<&str>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        base_price: Money::from_major(base_price),
        icon,
        note: note.map(str::to_string),
    }
}

fn product(
    id: u32,
    name: &str,
    price: i64,
    category: &str,
    material_label: &str,
    swatch: StyleToken,
    image_code: &str,
) -> CatalogProduct {
    CatalogProduct {
        id,
        name: name.to_string(),
        price: Money::from_major(price),
        category: category.to_string(),
        material_label: material_label.to_string(),
        swatch,
        image_code: image_code.to_string(),
    }
}

fn builtin_materials() -> Vec<Material> {
    vec![
        material(
            "apple",
            "Apple Skin Leather",
            "Bio-waste from Tyrolian apples.",
            15,
            "-35% CO2",
            StyleToken::AppleSkin,
        ),
        material(
            "lemon",
            "Lemon Skin Leather",
            "Citrus-based architectural fiber.",
            20,
            "-40% CO2",
            StyleToken::LemonSkin,
        ),
        material(
            "recycled",
            "Recycled Faux",
            "GRS Certified ocean plastics.",
            10,
            "-25% CO2",
            StyleToken::RecycledFaux,
        ),
    ]
}

fn builtin_categories() -> Vec<Category> {
    vec![
        category("wallet", "Wallets", 45, IconToken::Layers, None),
        category("belt", "Belts", 35, IconToken::Settings, None),
        category("handbag", "Handbags", 120, IconToken::ShoppingBag, None),
        category("pet", "Pet Collars", 25, IconToken::Heart, Some("Custom Only")),
    ]
}

fn builtin_products() -> Vec<CatalogProduct> {
    vec![
        product(1, "Heritage Wallet", 45, "Wallets", "Apple Skin", StyleToken::Oxblood, "W1"),
        product(2, "Slim Fold Wallet", 40, "Wallets", "Recycled Faux", StyleToken::Graphite, "W2"),
        product(3, "Signature Tote", 180, "Bags", "Lemon Skin", StyleToken::Ochre, "B1"),
        product(4, "Everyday Backpack", 145, "Bags", "Apple Skin", StyleToken::Slate, "B2"),
        product(5, "Crescent Clutch", 85, "Bags", "Recycled Faux", StyleToken::Onyx, "B3"),
        product(6, "Classic Waist Belt", 35, "Belts", "Lemon Skin", StyleToken::Amber, "L1"),
        product(7, "Formal Stitch Belt", 55, "Belts", "Apple Skin", StyleToken::Burgundy, "L2"),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&CatalogProduct]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(
            builtin.materials().to_vec(),
            builtin.categories().to_vec(),
            builtin.products().to_vec(),
        )
        .unwrap();
        assert_eq!(rebuilt, builtin);
    }

    #[test]
    fn test_static_catalog_matches_builtin() {
        assert_eq!(catalog(), &Catalog::builtin());
        assert_eq!(catalog().materials().len(), 3);
        assert_eq!(catalog().categories().len(), 4);
        assert_eq!(catalog().products().len(), 7);
    }

    #[test]
    fn test_lookups() {
        let c = catalog();
        assert_eq!(c.material("apple").unwrap().price_delta, Money::from_major(15));
        assert_eq!(c.category("wallet").unwrap().base_price, Money::from_major(45));
        assert_eq!(c.product(3).unwrap().name, "Signature Tote");
        assert_eq!(c.category("pet").unwrap().note.as_deref(), Some("Custom Only"));

        assert!(matches!(c.material("hemp"), Err(CoreError::MaterialNotFound(_))));
        assert!(matches!(c.category("hat"), Err(CoreError::CategoryNotFound(_))));
        assert!(matches!(c.product(99), Err(CoreError::ProductNotFound(99))));
    }

    #[test]
    fn test_defaults_are_first_records() {
        assert_eq!(catalog().default_category().id, "wallet");
        assert_eq!(catalog().default_material().id, "apple");
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let all = filter_by_category(catalog().products(), "All");
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_filter_by_label_keeps_relative_order() {
        let products = catalog().products();
        assert_eq!(ids(&filter_by_category(products, "Wallets")), vec![1, 2]);
        assert_eq!(ids(&filter_by_category(products, "Bags")), vec![3, 4, 5]);
        assert_eq!(ids(&catalog().products_in("Belts")), vec![6, 7]);
    }

    #[test]
    fn test_filter_unknown_label_is_empty() {
        assert!(filter_by_category(catalog().products(), "Hats").is_empty());
        // Labels match verbatim
        assert!(filter_by_category(catalog().products(), "wallets").is_empty());
        assert!(filter_by_category(&[], "All").is_empty());
    }

    #[test]
    fn test_every_shop_tab_has_products() {
        for tab in SHOP_FILTER_TABS {
            assert!(!catalog().products_in(tab).is_empty(), "tab {tab} is empty");
        }
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let mut materials = builtin_materials();
        materials.push(materials[0].clone());

        let err = Catalog::new(materials, builtin_categories(), builtin_products()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));

        let mut products = builtin_products();
        products[1].id = 1;
        assert!(Catalog::new(builtin_materials(), builtin_categories(), products).is_err());
    }

    #[test]
    fn test_new_rejects_negative_prices_and_empty_lists() {
        let mut categories = builtin_categories();
        categories[0].base_price = Money::from_cents(-1);
        assert!(Catalog::new(builtin_materials(), categories, vec![]).is_err());

        assert!(Catalog::new(vec![], builtin_categories(), vec![]).is_err());
        assert!(Catalog::new(builtin_materials(), vec![], vec![]).is_err());

        // Products are optional
        assert!(Catalog::new(builtin_materials(), builtin_categories(), vec![]).is_ok());
    }
}
