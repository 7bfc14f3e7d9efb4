//! # Cart Commands
//!
//! Commands for the shopping bag.
//!
//! ## Cart Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shop card "+" ──────► add_product_to_cart { productId: 3 }            │
//! │                                  │                                      │
//! │  Studio "Add to Bag" ─► add_configured_to_cart                         │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                      new cartId stamped, screen = cart                  │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │  Bag row "x" ────────► remove_from_cart { cartId: "..." }              │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                      items + itemCount + total                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};
use crexy_core::{CartId, CartTotals, Catalog, LineItem, Screen, Session};

/// Snapshot of the bag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    pub formatted_total: String,
    /// Screen after the command ran.
    pub screen: Screen,
    /// Id of the entry the command added, if it added one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<CartId>,
}

impl CartResponse {
    fn new(session: &Session, config: &ConfigState, added: Option<CartId>) -> Self {
        let totals = CartTotals::from(session.cart());
        CartResponse {
            items: session.cart().items().to_vec(),
            formatted_total: config.format_currency(totals.total.cents()),
            totals,
            screen: session.screen(),
            added,
        }
    }
}

/// Gets the bag contents.
pub fn get_cart(session: &SessionState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    session.with_session(|s| CartResponse::new(s, config, None))
}

/// Adds a ready-made product and opens the bag.
///
/// ## Errors
/// `NOT_FOUND` if no product has `product_id`; the bag is unchanged.
pub fn add_product_to_cart(
    catalog: &Catalog,
    session: &SessionState,
    config: &ConfigState,
    product_id: u32,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_product_to_cart command");

    session.with_session_mut(|s| {
        let cart_id = s.add_product(catalog, product_id)?;
        Ok(CartResponse::new(s, config, Some(cart_id)))
    })
}

/// Adds the current Studio configuration and opens the bag.
pub fn add_configured_to_cart(session: &SessionState, config: &ConfigState) -> CartResponse {
    debug!("add_configured_to_cart command");

    session.with_session_mut(|s| {
        let cart_id = s.add_configured();
        CartResponse::new(s, config, Some(cart_id))
    })
}

/// Removes one bag entry. Unknown ids leave the bag as it was.
pub fn remove_from_cart(
    session: &SessionState,
    config: &ConfigState,
    cart_id: String,
) -> CartResponse {
    debug!(cart_id = %cart_id, "remove_from_cart command");

    session.with_session_mut(|s| {
        if !s.remove_item(&CartId::from(cart_id)) {
            debug!("remove_from_cart: no such entry");
        }
        CartResponse::new(s, config, None)
    })
}
