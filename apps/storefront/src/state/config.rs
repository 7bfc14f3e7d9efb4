//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CREXY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use crexy_core::catalog::ALL_CATEGORIES_LABEL;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Brand name shown in the navbar and footer
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Shop tab selected when a session starts
    pub default_filter: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Crexy&Nilo"
    /// - Currency: GBP (£), 2 decimals
    /// - Shop tab: "All"
    fn default() -> Self {
        ConfigState {
            store_name: "Crexy&Nilo".to_string(),
            currency_code: "GBP".to_string(),
            currency_symbol: "£".to_string(),
            currency_decimals: 2,
            default_filter: ALL_CATEGORIES_LABEL.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CREXY_STORE_NAME`: Override store name
    /// - `CREXY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `CREXY_DEFAULT_FILTER`: Override the initial shop tab
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("CREXY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("CREXY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(filter) = std::env::var("CREXY_DEFAULT_FILTER") {
            if !filter.trim().is_empty() {
                config.default_filter = filter;
            }
        }

        config
    }

    /// Formats a pence amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use crexy_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(6000), "£60.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.store_name, "Crexy&Nilo");
        assert_eq!(config.currency_code, "GBP");
        assert_eq!(config.default_filter, "All");
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(22500), "£225.00");
        assert_eq!(config.format_currency(1), "£0.01");
        assert_eq!(config.format_currency(0), "£0.00");
        assert_eq!(config.format_currency(-550), "-£5.50");
    }

    #[test]
    fn test_format_currency_without_decimals() {
        let config = ConfigState {
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(45), "£45");
    }

    // The only test that sets CREXY_* variables.
    #[test]
    fn test_from_env_overrides() {
        std::env::set_var("CREXY_STORE_NAME", "Nilo Outlet");
        std::env::set_var("CREXY_CURRENCY_SYMBOL", "€");
        std::env::set_var("CREXY_DEFAULT_FILTER", "   ");

        let config = ConfigState::from_env();
        assert_eq!(config.store_name, "Nilo Outlet");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_filter, "All");
        assert_eq!(config.format_currency(4500), "€45.00");

        std::env::set_var("CREXY_DEFAULT_FILTER", "Belts");
        assert_eq!(ConfigState::from_env().default_filter, "Belts");

        for var in ["CREXY_STORE_NAME", "CREXY_CURRENCY_SYMBOL", "CREXY_DEFAULT_FILTER"] {
            std::env::remove_var(var);
        }
        assert_eq!(ConfigState::from_env(), ConfigState::default());
    }
}
