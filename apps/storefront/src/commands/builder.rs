//! # Builder Commands
//!
//! Commands behind "The Studio", the build-your-own configurator.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────┐   01. Silhouette                               │
//! │  │                     │   select_category { categoryId: "belt" }       │
//! │  │   preview swatch    │                                                │
//! │  │        CN           │   02. Bio-Material                             │
//! │  │                     │   select_material { materialId: "lemon" }      │
//! │  └─────────────────────┘                                                │
//! │   Custom Belts             03. Personalization                          │
//! │   £55.00                   set_initials { initials: "CN" }              │
//! │                                                                         │
//! │  Every call returns the full selection with its live price.             │
//! │  "Add to Bag" is add_configured_to_cart (cart.rs).                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};
use crexy_core::{Catalog, Money, Selection, SessionAction};

/// Current configurator state with its price.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub selection: Selection,
    /// "Custom " + category name, as shown under the preview.
    pub preview_name: String,
    pub price: Money,
    pub formatted_price: String,
}

impl SelectionResponse {
    fn snapshot(session: &SessionState, config: &ConfigState) -> Self {
        session.with_session(|s| {
            let selection = s.selection().clone();
            let price = s.configured_price();
            SelectionResponse {
                preview_name: format!("Custom {}", selection.category.name),
                selection,
                price,
                formatted_price: config.format_currency(price.cents()),
            }
        })
    }
}

/// Gets the configurator selection.
pub fn get_selection(session: &SessionState, config: &ConfigState) -> SelectionResponse {
    debug!("get_selection command");
    SelectionResponse::snapshot(session, config)
}

/// Picks the silhouette.
///
/// ## Errors
/// `NOT_FOUND` if the category id is not in the catalog; the selection is
/// unchanged.
pub fn select_category(
    catalog: &Catalog,
    session: &SessionState,
    config: &ConfigState,
    category_id: String,
) -> Result<SelectionResponse, ApiError> {
    debug!(category_id = %category_id, "select_category command");

    session.with_session_mut(|s| s.dispatch(catalog, SessionAction::SelectCategory(category_id)))?;
    Ok(SelectionResponse::snapshot(session, config))
}

/// Picks the bio-material.
pub fn select_material(
    catalog: &Catalog,
    session: &SessionState,
    config: &ConfigState,
    material_id: String,
) -> Result<SelectionResponse, ApiError> {
    debug!(material_id = %material_id, "select_material command");

    session.with_session_mut(|s| s.dispatch(catalog, SessionAction::SelectMaterial(material_id)))?;
    Ok(SelectionResponse::snapshot(session, config))
}

/// Sets the personalisation initials (anything past three characters is
/// dropped).
pub fn set_initials(
    catalog: &Catalog,
    session: &SessionState,
    config: &ConfigState,
    initials: String,
) -> Result<SelectionResponse, ApiError> {
    debug!(initials = %initials, "set_initials command");

    session.with_session_mut(|s| s.dispatch(catalog, SessionAction::SetInitials(initials)))?;
    Ok(SelectionResponse::snapshot(session, config))
}
