//! # Pricing Module
//!
//! Turns a cart into checkout numbers: subtotal, shipping, tax, total.
//!
//! ## Checkout Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Summary Calculation                          │
//! │                                                                         │
//! │  subtotal = Σ line totals                                              │
//! │       │                                                                 │
//! │       ├── shipping = $0.00   if cart is empty                          │
//! │       │              $0.00   if subtotal > free-shipping threshold     │
//! │       │              $4.99   otherwise (flat rate)                     │
//! │       │                                                                 │
//! │       ├── tax = subtotal × 8%     (flat rate, shipping untaxed)        │
//! │       │                                                                 │
//! │       └── total = subtotal + shipping + tax                            │
//! │                                                                         │
//! │  Gap hint: "Add $X more for free shipping!"                            │
//! │  shown while 0 < gap, i.e. subtotal strictly below the threshold.      │
//! │  At exactly the threshold the flat rate still applies and no hint      │
//! │  is shown; one more cent tips the order into free shipping.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::TaxRate;
use crate::validation::validate_tax_rate_bps;
use crate::{DEFAULT_TAX_RATE_BPS, FLAT_SHIPPING_CENTS, FREE_SHIPPING_OVER_CENTS};

// =============================================================================
// Pricing Policy
// =============================================================================

/// The storefront's pricing rules: flat tax, flat shipping, free-shipping
/// threshold.
///
/// Constructed once (usually from [`Default`] or store config) and handed
/// to the cart store; the fields are private so a policy that passed
/// validation stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Flat sales tax applied to the subtotal.
    tax_rate: TaxRate,

    /// Flat shipping charge for orders below the threshold.
    shipping_flat: Money,

    /// Orders with a subtotal strictly above this ship free.
    free_shipping_over: Money,
}

impl PricingPolicy {
    /// Creates a pricing policy, validating the inputs.
    ///
    /// ## Rules
    /// - Tax rate at most 10000 bps (100%)
    /// - Shipping charge and threshold must be non-negative
    pub fn new(
        tax_rate: TaxRate,
        shipping_flat: Money,
        free_shipping_over: Money,
    ) -> ValidationResult<Self> {
        validate_tax_rate_bps(tax_rate.bps())?;

        if shipping_flat.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "shipping_flat_cents".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        if free_shipping_over.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "free_shipping_over_cents".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        Ok(PricingPolicy {
            tax_rate,
            shipping_flat,
            free_shipping_over,
        })
    }

    /// The flat tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// The flat shipping charge.
    #[inline]
    pub fn shipping_flat(&self) -> Money {
        self.shipping_flat
    }

    /// The free-shipping threshold (exclusive).
    #[inline]
    pub fn free_shipping_over(&self) -> Money {
        self.free_shipping_over
    }

    /// Computes the order summary for a cart.
    ///
    /// ## Behavior
    /// - Empty cart: every amount is zero and no gap hint is produced
    /// - Shipping is free only when the subtotal is strictly above the
    ///   threshold
    /// - Tax applies to the subtotal only; shipping is untaxed
    pub fn summarize(&self, cart: &Cart) -> OrderSummary {
        let subtotal = cart.subtotal();

        let shipping = if cart.is_empty() || subtotal > self.free_shipping_over {
            Money::zero()
        } else {
            self.shipping_flat
        };

        let tax = subtotal.calculate_tax(self.tax_rate);
        let total = subtotal + shipping + tax;

        let free_shipping_gap = if !cart.is_empty() && subtotal < self.free_shipping_over {
            Some((self.free_shipping_over - subtotal).cents())
        } else {
            None
        };

        OrderSummary {
            subtotal_cents: subtotal.cents(),
            shipping_cents: shipping.cents(),
            tax_cents: tax.cents(),
            total_cents: total.cents(),
            free_shipping_gap_cents: free_shipping_gap,
        }
    }
}

/// Default policy: 8% tax, $4.99 flat shipping, free above $25.00.
impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            tax_rate: TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
            shipping_flat: Money::from_cents(FLAT_SHIPPING_CENTS),
            free_shipping_over: Money::from_cents(FREE_SHIPPING_OVER_CENTS),
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Checkout totals for the cart page.
///
/// `free_shipping_gap_cents` carries the "Add $X more for free shipping!"
/// amount while the order hasn't reached the threshold yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub free_shipping_gap_cents: Option<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================
