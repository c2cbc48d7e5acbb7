//! # Configuration State
//!
//! Stores kiosk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PRISM_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

use prism_core::types::TaxRate;
use prism_core::Money;

use crate::navigation::HOME_ROUTE;

/// Kiosk configuration.
///
/// ## Fields
/// Most fields have sensible defaults for development.
/// Production deployments should configure these properly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Kiosk name (displayed on the confirmation screen)
    pub kiosk_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Sales tax rate in basis points
    /// e.g., 825 = 8.25%
    pub tax_rate_bps: u32,

    /// Flat shipping fee in cents, charged once per non-empty order
    pub shipping_fee_cents: i64,

    /// Route the shell returns to after an order is placed
    pub home_route: String,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Kiosk: "Prism Photo Kiosk"
    /// - Currency: USD ($)
    /// - Tax: 8.25%
    /// - Shipping: $5.99 flat
    fn default() -> Self {
        ConfigState {
            kiosk_name: "Prism Photo Kiosk".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            tax_rate_bps: prism_core::DEFAULT_TAX_RATE_BPS,
            shipping_fee_cents: prism_core::SHIPPING_FEE_CENTS,
            home_route: HOME_ROUTE.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PRISM_KIOSK_NAME`: Override kiosk name
    /// - `PRISM_TAX_RATE`: Override tax rate as a percentage (e.g., "8.25")
    /// - `PRISM_SHIPPING_FEE_CENTS`: Override the flat shipping fee
    /// - `PRISM_HOME_ROUTE`: Override the post-order route
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(kiosk_name) = std::env::var("PRISM_KIOSK_NAME") {
            config.kiosk_name = kiosk_name;
        }

        if let Ok(tax_rate_str) = std::env::var("PRISM_TAX_RATE") {
            if let Ok(rate) = tax_rate_str.parse::<f64>() {
                config.tax_rate_bps = (rate * 100.0) as u32;
            }
        }

        if let Ok(fee_str) = std::env::var("PRISM_SHIPPING_FEE_CENTS") {
            if let Ok(fee) = fee_str.parse::<i64>() {
                config.shipping_fee_cents = fee;
            }
        }

        if let Ok(route) = std::env::var("PRISM_HOME_ROUTE") {
            config.home_route = route;
        }

        config
    }

    /// Returns the configured tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Returns the configured shipping fee.
    #[inline]
    pub fn shipping_fee(&self) -> Money {
        Money::from_cents(self.shipping_fee_cents)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1465), "$14.65");
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
