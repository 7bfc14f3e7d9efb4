//! # Shared Value Types
//!
//! Small enumerations shared by the catalog, the cart and the view
//! controller.
//!
//! ## Tokens, Not Styles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Core record                 Token              Presentation layer      │
//! │  ───────────                 ─────              ──────────────────      │
//! │  Material "apple"     ──►  StyleToken::AppleSkin ──► swatch colour      │
//! │  CatalogProduct 1     ──►  StyleToken::Oxblood   ──► card background    │
//! │  Category "wallet"    ──►  IconToken::Layers     ──► icon component     │
//! │                                                                         │
//! │  The core never sees a colour value or an icon component.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Style Token
// =============================================================================

/// Swatch a record is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    /// Deep red of apple skin leather.
    AppleSkin,
    /// Yellow of lemon skin leather.
    LemonSkin,
    /// Near-black of recycled faux leather.
    RecycledFaux,
    Oxblood,
    Graphite,
    Ochre,
    Slate,
    Onyx,
    Amber,
    Burgundy,
    /// Fallback for entries that carry no swatch of their own.
    Neutral,
}

impl Default for StyleToken {
    fn default() -> Self {
        StyleToken::Neutral
    }
}

// =============================================================================
// Icon Token
// =============================================================================

/// Icon shown next to a configurator category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum IconToken {
    Layers,
    Settings,
    ShoppingBag,
    Heart,
}

// =============================================================================
// Screen
// =============================================================================

/// Top-level screen of the storefront.
///
/// Any screen can be reached from any other; there is no terminal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Marketing landing page.
    Home,
    /// Build-your-own configurator ("The Studio").
    Builder,
    /// Capsule collection with category tabs.
    Shop,
    /// The bag.
    Cart,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_default() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn test_screen_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Screen::Builder).unwrap(), "\"builder\"");
        let parsed: Screen = serde_json::from_str("\"cart\"").unwrap();
        assert_eq!(parsed, Screen::Cart);
    }

    #[test]
    fn test_tokens_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&StyleToken::RecycledFaux).unwrap(),
            "\"recycled_faux\""
        );
        assert_eq!(
            serde_json::to_string(&IconToken::ShoppingBag).unwrap(),
            "\"shopping_bag\""
        );
        assert_eq!(StyleToken::default(), StyleToken::Neutral);
    }
}
