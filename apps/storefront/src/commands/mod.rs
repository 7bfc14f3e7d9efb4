//! # Storefront Commands
//!
//! One function per request the presentation layer can make. Each command
//! takes the state it needs by reference, logs at `debug`, and returns a
//! serializable response or an [`ApiError`](crate::error::ApiError).
//!
//! ## Command Modules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  config.rs   get_config                                                 │
//! │  catalog.rs  get_catalog, list_products, set_filter                     │
//! │  view.rs     get_view, navigate                                         │
//! │  builder.rs  get_selection, select_category, select_material,           │
//! │              set_initials                                               │
//! │  cart.rs     get_cart, add_product_to_cart, add_configured_to_cart,     │
//! │              remove_from_cart                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire dispatch lives in [`crate::invoke`].

pub mod builder;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod view;
