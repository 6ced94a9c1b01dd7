//! # Order Summary
//!
//! Subtotal, shipping, tax and total for the cart page.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Subtotal (3 items)                                  $38.97            │
//! │  Shipping            subtotal >= $35.00 ? FREE : $4.99   FREE          │
//! │  Tax                 8% of subtotal                   $3.12            │
//! │  ───────────────────────────────────────────────────────────           │
//! │  Total                                               $42.09            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shipping is not taxed. An empty cart ships nothing, so it owes no
//! shipping fee.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartState;
use crate::money::Money;
use crate::types::TaxRate;
use crate::validation::{validate_non_negative_cents, validate_tax_rate_bps, ValidationResult};

/// Free shipping threshold: $35.00.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(3500);

/// Flat shipping fee below the threshold: $4.99.
pub const DEFAULT_FLAT_SHIPPING: Money = Money::from_cents(499);

/// Estimated sales tax: 8%.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(800);

// =============================================================================
// Checkout Policy
// =============================================================================

/// Shipping and tax rules applied to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPolicy {
    free_shipping_threshold: Money,
    flat_shipping: Money,
    tax_rate: TaxRate,
}

impl CheckoutPolicy {
    /// Creates a policy, rejecting negative amounts and rates above 100%.
    pub fn new(
        free_shipping_threshold: Money,
        flat_shipping: Money,
        tax_rate: TaxRate,
    ) -> ValidationResult<Self> {
        validate_non_negative_cents("free_shipping_threshold", free_shipping_threshold.cents())?;
        validate_non_negative_cents("flat_shipping", flat_shipping.cents())?;
        validate_tax_rate_bps(tax_rate.bps())?;

        Ok(CheckoutPolicy {
            free_shipping_threshold,
            flat_shipping,
            tax_rate,
        })
    }

    pub fn free_shipping_threshold(&self) -> Money {
        self.free_shipping_threshold
    }

    pub fn flat_shipping(&self) -> Money {
        self.flat_shipping
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Shipping owed on a subtotal.
    pub fn shipping_for(&self, subtotal: Money, is_empty: bool) -> Money {
        if is_empty || subtotal >= self.free_shipping_threshold {
            Money::zero()
        } else {
            self.flat_shipping
        }
    }

    /// How much more the shopper needs to spend for free shipping.
    pub fn remaining_for_free_shipping(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_shipping_threshold {
            Money::zero()
        } else {
            Money::from_cents(self.free_shipping_threshold.cents() - subtotal.cents())
        }
    }
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        CheckoutPolicy {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            flat_shipping: DEFAULT_FLAT_SHIPPING,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// The cart page's order summary box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_items: i64,
    #[ts(type = "number")]
    pub subtotal: Money,
    #[ts(type = "number")]
    pub shipping: Money,
    #[ts(type = "number")]
    pub tax: Money,
    #[ts(type = "number")]
    pub total: Money,
}

impl OrderSummary {
    /// Computes the summary for a cart under a policy.
    pub fn for_cart(cart: &CartState, policy: &CheckoutPolicy) -> Self {
        let subtotal = cart.total_price;
        let shipping = policy.shipping_for(subtotal, cart.is_empty());
        let tax = subtotal.calculate_tax(policy.tax_rate);

        OrderSummary {
            total_items: cart.total_items,
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Checks whether shipping was waived.
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }
}
