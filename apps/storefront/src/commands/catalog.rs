//! # Catalog Commands
//!
//! Commands for reading the catalog and browsing the shop.
//!
//! ## Shop Tab Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Capsule Collection                                   │
//! │                                                                         │
//! │   [ All ]  [ Wallets ]  [ Bags ]  [ Belts ]     ◄── filterTabs         │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  {"cmd":"set_filter","label":"Wallets"}                                 │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  session.active_filter = "Wallets"                                      │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  filter_by_category(products, "Wallets")                                │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  Heritage Wallet £45.00 · Slim Fold Wallet £40.00                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::state::{ConfigState, SessionState};
use crexy_core::catalog::SHOP_FILTER_TABS;
use crexy_core::{filter_by_category, Catalog, CatalogProduct, Category, Material, StyleToken};

/// Whole catalog, as the presentation layer loads it at startup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub materials: Vec<Material>,
    pub categories: Vec<Category>,
    pub products: Vec<CatalogProduct>,
    pub filter_tabs: Vec<String>,
}

/// Product card DTO for the shop grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u32,
    pub name: String,
    pub price_cents: i64,
    pub formatted_price: String,
    pub category: String,
    pub material_label: String,
    pub swatch: StyleToken,
    pub image_code: String,
}

impl ProductDto {
    fn new(product: &CatalogProduct, config: &ConfigState) -> Self {
        ProductDto {
            id: product.id,
            name: product.name.clone(),
            price_cents: product.price.cents(),
            formatted_price: config.format_currency(product.price.cents()),
            category: product.category.clone(),
            material_label: product.material_label.clone(),
            swatch: product.swatch,
            image_code: product.image_code.clone(),
        }
    }
}

/// Products listed under one shop tab.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub label: String,
    pub products: Vec<ProductDto>,
}

impl ProductListResponse {
    fn new(catalog: &Catalog, config: &ConfigState, label: String) -> Self {
        let products = filter_by_category(catalog.products(), &label)
            .into_iter()
            .map(|p| ProductDto::new(p, config))
            .collect();
        ProductListResponse { label, products }
    }
}

/// Returns every material, category and product plus the shop tabs.
pub fn get_catalog(catalog: &Catalog) -> CatalogResponse {
    debug!("get_catalog command");

    CatalogResponse {
        materials: catalog.materials().to_vec(),
        categories: catalog.categories().to_vec(),
        products: catalog.products().to_vec(),
        filter_tabs: SHOP_FILTER_TABS.iter().map(|t| t.to_string()).collect(),
    }
}

/// Lists shop products.
///
/// ## Arguments
/// * `label` - Tab to list; `None` uses the session's active tab. The
///   session's tab is not changed either way.
pub fn list_products(
    catalog: &Catalog,
    session: &SessionState,
    config: &ConfigState,
    label: Option<String>,
) -> ProductListResponse {
    let label = label.unwrap_or_else(|| session.with_session(|s| s.active_filter().to_string()));
    debug!(label = %label, "list_products command");

    ProductListResponse::new(catalog, config, label)
}

/// Switches the active shop tab and returns its products.
///
/// Unknown labels are accepted and simply list nothing.
pub fn set_filter(
    catalog: &Catalog,
    session: &SessionState,
    config: &ConfigState,
    label: String,
) -> ProductListResponse {
    debug!(label = %label, "set_filter command");

    session.with_session_mut(|s| s.set_filter(label.as_str()));
    ProductListResponse::new(catalog, config, label)
}
