//! # Session (View Controller)
//!
//! One shopper's state: which screen is showing, the active shop tab, the
//! configurator selection and the bag. All of it lives in one explicit
//! value that actions are applied to, reducer style.
//!
//! ## Action Routing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session::dispatch                                    │
//! │                                                                         │
//! │  SessionAction            Delegates to                 Screen after     │
//! │  ─────────────            ────────────                 ────────────     │
//! │  Navigate(screen)    ──►  (screen only)                screen           │
//! │  SetFilter(label)    ──►  (filter only)                unchanged        │
//! │  SelectCategory(id)  ──►  Selection::with_category     unchanged        │
//! │  SelectMaterial(id)  ──►  Selection::with_material     unchanged        │
//! │  SetInitials(raw)    ──►  Selection::with_initials     unchanged        │
//! │  AddProduct(id)      ──►  Cart::add_item               Cart             │
//! │  AddConfigured       ──►  build_configured_item        Cart             │
//! │                           + Cart::add_item                              │
//! │  RemoveItem(id)      ──►  Cart::remove_item            unchanged        │
//! │                                                                         │
//! │  Adding to the bag is the only action that also moves the screen.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use crexy_core::catalog::catalog;
//! use crexy_core::money::Money;
//! use crexy_core::session::{Session, SessionAction};
//! use crexy_core::Screen;
//!
//! let mut session = Session::new(catalog());
//! session.dispatch(catalog(), SessionAction::SetInitials("CN".into())).unwrap();
//! session.dispatch(catalog(), SessionAction::AddConfigured).unwrap();
//!
//! assert_eq!(session.screen(), Screen::Cart);
//! assert_eq!(session.cart().total(), Money::from_major(60));
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartId};
use crate::catalog::{filter_by_category, Catalog, CatalogProduct, ALL_CATEGORIES_LABEL};
use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::{build_configured_item, ItemDraft, Selection};
use crate::types::Screen;

/// A discrete user action.
///
/// ```json
/// { "type": "selectMaterial", "value": "lemon" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum SessionAction {
    Navigate(Screen),
    SetFilter(String),
    SelectCategory(String),
    SelectMaterial(String),
    SetInitials(String),
    AddProduct(u32),
    AddConfigured,
    RemoveItem(CartId),
}

/// One shopper's storefront state.
///
/// The cart outlives navigation; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    screen: Screen,
    active_filter: String,
    selection: Selection,
    cart: Cart,
}

impl Session {
    /// Fresh session on the home screen with an empty bag.
    pub fn new(catalog: &Catalog) -> Self {
        Session {
            screen: Screen::default(),
            active_filter: ALL_CATEGORIES_LABEL.to_string(),
            selection: Selection::new(catalog),
            cart: Cart::new(),
        }
    }

    /// Applies one action.
    ///
    /// Returns `true` when the state changed. Fails only when the action
    /// names a category, material or product the catalog does not have; the
    /// session is left untouched in that case.
    pub fn dispatch(&mut self, catalog: &Catalog, action: SessionAction) -> CoreResult<bool> {
        match action {
            SessionAction::Navigate(screen) => Ok(self.navigate(screen)),
            SessionAction::SetFilter(label) => Ok(self.set_filter(label)),
            SessionAction::SelectCategory(id) => self.select_category(catalog, &id),
            SessionAction::SelectMaterial(id) => self.select_material(catalog, &id),
            SessionAction::SetInitials(raw) => Ok(self.set_initials(&raw)),
            SessionAction::AddProduct(id) => self.add_product(catalog, id).map(|_| true),
            SessionAction::AddConfigured => {
                self.add_configured();
                Ok(true)
            }
            SessionAction::RemoveItem(cart_id) => Ok(self.remove_item(&cart_id)),
        }
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    pub fn navigate(&mut self, screen: Screen) -> bool {
        let changed = self.screen != screen;
        self.screen = screen;
        changed
    }

    /// Switches the shop tab. Any label is accepted.
    pub fn set_filter(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        let changed = self.active_filter != label;
        self.active_filter = label;
        changed
    }

    pub fn select_category(&mut self, catalog: &Catalog, id: &str) -> CoreResult<bool> {
        let category = catalog.category(id)?.clone();
        Ok(self.replace_selection(self.selection.clone().with_category(category)))
    }

    pub fn select_material(&mut self, catalog: &Catalog, id: &str) -> CoreResult<bool> {
        let material = catalog.material(id)?.clone();
        Ok(self.replace_selection(self.selection.clone().with_material(material)))
    }

    pub fn set_initials(&mut self, raw: &str) -> bool {
        self.replace_selection(self.selection.clone().with_initials(raw))
    }

    /// Puts a shop product in the bag and opens the bag.
    pub fn add_product(&mut self, catalog: &Catalog, product_id: u32) -> CoreResult<CartId> {
        let draft = ItemDraft::from_product(catalog.product(product_id)?);
        Ok(self.add_to_cart(draft))
    }

    /// Puts the current configuration in the bag and opens the bag.
    ///
    /// The selection is kept, so the same design can be added again.
    pub fn add_configured(&mut self) -> CartId {
        let draft = build_configured_item(&self.selection);
        self.add_to_cart(draft)
    }

    /// Removes a bag entry; `false` if it was not there.
    pub fn remove_item(&mut self, cart_id: &CartId) -> bool {
        self.cart.remove_item(cart_id).is_some()
    }

    fn add_to_cart(&mut self, draft: ItemDraft) -> CartId {
        let cart_id = self.cart.add_item(draft);
        self.screen = Screen::Cart;
        cart_id
    }

    fn replace_selection(&mut self, selection: Selection) -> bool {
        let changed = self.selection != selection;
        self.selection = selection;
        changed
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Shop products under the active tab.
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogProduct> {
        filter_by_category(catalog.products(), &self.active_filter)
    }

    /// Live configurator price.
    pub fn configured_price(&self) -> Money {
        self.selection.price()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::error::CoreError;

    fn session() -> Session {
        Session::new(catalog())
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session();
        assert_eq!(s.screen(), Screen::Home);
        assert_eq!(s.active_filter(), "All");
        assert_eq!(s.selection().category.id, "wallet");
        assert_eq!(s.selection().material.id, "apple");
        assert_eq!(s.selection().initials, "");
        assert!(s.cart().is_empty());
        assert_eq!(s.configured_price(), Money::from_major(60));
    }

    #[test]
    fn test_navigation_is_unrestricted() {
        let mut s = session();
        let screens = [Screen::Cart, Screen::Builder, Screen::Home, Screen::Shop, Screen::Cart];
        for screen in screens {
            s.dispatch(catalog(), SessionAction::Navigate(screen)).unwrap();
            assert_eq!(s.screen(), screen);
        }
        assert!(!s.navigate(Screen::Cart));
    }

    #[test]
    fn test_add_product_moves_to_cart() {
        let mut s = session();
        s.navigate(Screen::Shop);

        let changed = s.dispatch(catalog(), SessionAction::AddProduct(1)).unwrap();
        assert!(changed);
        assert_eq!(s.screen(), Screen::Cart);
        assert_eq!(s.cart().items()[0].name, "Heritage Wallet");
        assert_eq!(s.cart().items()[0].details, "Apple Skin");
    }

    #[test]
    fn test_add_configured_moves_to_cart() {
        let mut s = session();
        s.navigate(Screen::Builder);
        s.select_category(catalog(), "handbag").unwrap();
        s.select_material(catalog(), "lemon").unwrap();
        s.set_initials("ABCD");

        let id = s.add_configured();
        assert_eq!(s.screen(), Screen::Cart);

        let item = s.cart().get(&id).unwrap();
        assert_eq!(item.name, "Custom Handbags");
        assert_eq!(item.price, Money::from_major(140));
        assert_eq!(item.details, "Lemon Skin Leather | Initials: ABC");
        // Selection survives the add
        assert_eq!(s.selection().initials, "ABC");
    }

    #[test]
    fn test_unknown_ids_leave_session_untouched() {
        let mut s = session();
        let before = s.clone();

        let err = s
            .dispatch(catalog(), SessionAction::SelectCategory("hat".into()))
            .unwrap_err();
        assert!(matches!(err, CoreError::CategoryNotFound(_)));
        assert!(s.select_material(catalog(), "hemp").is_err());
        assert!(s.dispatch(catalog(), SessionAction::AddProduct(99)).is_err());

        assert_eq!(s, before);
    }

    #[test]
    fn test_remove_unknown_item_is_not_an_error() {
        let mut s = session();
        s.add_product(catalog(), 2).unwrap();
        let before = s.clone();

        let changed = s
            .dispatch(catalog(), SessionAction::RemoveItem(CartId::from("missing")))
            .unwrap();
        assert!(!changed);
        assert_eq!(s, before);
    }

    #[test]
    fn test_cart_survives_navigation() {
        let mut s = session();
        let first = s.add_product(catalog(), 1).unwrap();
        s.navigate(Screen::Shop);
        s.add_product(catalog(), 3).unwrap();
        s.navigate(Screen::Home);

        assert_eq!(s.cart().total(), Money::from_major(225));
        assert!(s.remove_item(&first));
        assert_eq!(s.cart().total(), Money::from_major(180));
    }

    #[test]
    fn test_filter_drives_visible_products() {
        let mut s = session();
        assert_eq!(s.visible_products(catalog()).len(), 7);

        assert!(s.set_filter("Bags"));
        let names: Vec<&str> = s
            .visible_products(catalog())
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Signature Tote", "Everyday Backpack", "Crescent Clutch"]);

        s.dispatch(catalog(), SessionAction::SetFilter("Hats".into())).unwrap();
        assert!(s.visible_products(catalog()).is_empty());
    }

    #[test]
    fn test_selection_changes_report_whether_anything_changed() {
        let mut s = session();
        assert!(!s.select_category(catalog(), "wallet").unwrap());
        assert!(s.select_category(catalog(), "belt").unwrap());
        assert!(s.set_initials("CN"));
        assert!(!s.set_initials("CN"));
        // Truncates to the same value
        assert!(s.set_initials("CNX"));
        assert!(!s.set_initials("CNXY"));
    }

    #[test]
    fn test_actions_deserialize_from_tagged_json() {
        let action: SessionAction =
            serde_json::from_str(r#"{"type":"selectMaterial","value":"lemon"}"#).unwrap();
        assert_eq!(action, SessionAction::SelectMaterial("lemon".into()));

        let action: SessionAction =
            serde_json::from_str(r#"{"type":"navigate","value":"builder"}"#).unwrap();
        assert_eq!(action, SessionAction::Navigate(Screen::Builder));

        let action: SessionAction = serde_json::from_str(r#"{"type":"addConfigured"}"#).unwrap();
        assert_eq!(action, SessionAction::AddConfigured);
    }
}
