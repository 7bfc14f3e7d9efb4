//! # crexy-core: Pure Business Logic for the Crexy&Nilo Storefront
//!
//! This crate holds the storefront's domain logic as pure functions and
//! plain values with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Crexy&Nilo Storefront Architecture                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation Layer                           │   │
//! │  │    Home ──► Shop ──► The Studio ──► Bag                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON invoke (one request per line)     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Commands                          │   │
//! │  │    list_products, select_material, add_product_to_cart, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ crexy-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │   cart    │  │  session  │  │   │
//! │  │   │ Material  │  │ Selection │  │   Cart    │  │  Screen   │  │   │
//! │  │   │ Category  │  │ ItemDraft │  │ LineItem  │  │  Actions  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Materials, categories, shop products and the shop filter
//! - [`pricing`] - Configurator selection and price computation
//! - [`cart`] - The bag and its derived total
//! - [`session`] - Screen state and action routing
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Style/icon tokens and the screen enum
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog invariant checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output (cart ids aside)
//! 2. **Total Operations**: pricing, filtering and cart math never fail
//! 3. **Integer Money**: all amounts are pence (i64)
//! 4. **Explicit State**: the session is a value, not an ambient global
//!
//! ## Example Usage
//!
//! ```rust
//! use crexy_core::catalog::catalog;
//! use crexy_core::pricing::{build_configured_item, Selection};
//! use crexy_core::Money;
//!
//! let selection = Selection::new(catalog()).with_initials("ABCD");
//! let item = build_configured_item(&selection);
//!
//! assert_eq!(item.name, "Custom Wallets");
//! assert_eq!(item.price, Money::from_major(60));
//! assert_eq!(item.details, "Apple Skin Leather | Initials: ABC");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartId, CartTotals, LineItem};
pub use catalog::{catalog, filter_by_category, Catalog, CatalogProduct, Category, Material};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{build_configured_item, compute_price, normalize_initials, ItemDraft, Selection};
pub use session::{Session, SessionAction};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of personalisation initials.
pub const MAX_INITIALS: usize = 3;
