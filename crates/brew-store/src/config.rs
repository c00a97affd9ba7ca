//! # Store Configuration
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BREW_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use brew_core::{
    Money, PricingPolicy, TaxRate, DEFAULT_TAX_RATE_BPS, FLAT_SHIPPING_CENTS,
    FREE_SHIPPING_OVER_CENTS,
};

use crate::error::StoreResult;

/// Storefront configuration.
///
/// ## Fields
/// Defaults match the flagship BrewMaster store; deployments override
/// via environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (shown in the header and page titles).
    pub store_name: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,

    /// Sales tax rate in basis points (800 = 8%).
    pub tax_rate_bps: u32,

    /// Flat shipping charge in cents.
    pub shipping_flat_cents: i64,

    /// Free-shipping threshold in cents (exclusive).
    pub free_shipping_over_cents: i64,
}

impl Default for StoreConfig {
    /// Returns the default BrewMaster configuration.
    ///
    /// ## Default Values
    /// - Store: "BrewMaster"
    /// - Currency: USD ($)
    /// - Tax: 8% flat
    /// - Shipping: $4.99 flat, free above $25.00
    fn default() -> Self {
        StoreConfig {
            store_name: "BrewMaster".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            shipping_flat_cents: FLAT_SHIPPING_CENTS,
            free_shipping_over_cents: FREE_SHIPPING_OVER_CENTS,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BREW_STORE_NAME`: Override store name
    /// - `BREW_TAX_RATE`: Override tax rate as a percentage (e.g., "8.25")
    /// - `BREW_SHIPPING_FLAT_CENTS`: Override flat shipping charge
    /// - `BREW_FREE_SHIPPING_OVER_CENTS`: Override free-shipping threshold
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("BREW_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(tax_rate_str) = std::env::var("BREW_TAX_RATE") {
            if let Ok(rate) = tax_rate_str.parse::<f64>() {
                config.tax_rate_bps = (rate * 100.0) as u32;
            }
        }

        if let Ok(shipping_str) = std::env::var("BREW_SHIPPING_FLAT_CENTS") {
            if let Ok(cents) = shipping_str.parse::<i64>() {
                config.shipping_flat_cents = cents;
            }
        }

        if let Ok(threshold_str) = std::env::var("BREW_FREE_SHIPPING_OVER_CENTS") {
            if let Ok(cents) = threshold_str.parse::<i64>() {
                config.free_shipping_over_cents = cents;
            }
        }

        config
    }

    /// Builds the validated pricing policy described by this config.
    pub fn pricing_policy(&self) -> StoreResult<PricingPolicy> {
        let policy = PricingPolicy::new(
            TaxRate::from_bps(self.tax_rate_bps),
            Money::from_cents(self.shipping_flat_cents),
            Money::from_cents(self.free_shipping_over_cents),
        )?;
        Ok(policy)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use brew_store::config::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
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
