//! # Domain Types
//!
//! Cart line types shared by the reducer, the store, and the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   add_item    ┌─────────────────┐                 │
//! │  │  CartLineInput  │ ────────────► │    CartLine     │                 │
//! │  │  ─────────────  │               │  ─────────────  │                 │
//! │  │  id             │               │  (same fields)  │                 │
//! │  │  name, subtitle │               │  quantity >= 1  │                 │
//! │  │  price, image   │               └─────────────────┘                 │
//! │  │  spicy?, size?  │                                                    │
//! │  └─────────────────┘   ┌─────────────────┐   ┌─────────────────────┐   │
//! │                        │    TaxRate      │   │  OrderConfirmation  │   │
//! │                        │  bps (u32)      │   │  order_number, lines│   │
//! │                        │  800 = 8%       │   │  summary, placed_at │   │
//! │                        └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize in camelCase to match the storefront's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::checkout::OrderSummary;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_display_text, validate_price_cents, validate_product_id, ValidationResult,
};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Cart Line Input
// =============================================================================

/// What the storefront hands the cart when a shopper clicks "Add to cart".
///
/// Carries everything a [`CartLine`] has except the quantity, which the
/// cart owns. Build it with [`CartLineInput::new`] so the id, name and
/// price are checked once at the boundary. Deserializing runs the same
/// checks, so storefront JSON cannot smuggle in an empty id or a
/// negative price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", try_from = "CartLineInputWire")]
pub struct CartLineInput {
    /// Stable product id; the cart's line key.
    pub id: String,

    /// Display name ("The Godfather").
    pub name: String,

    /// Display subtitle ("Prohibition BBQ").
    pub subtitle: String,

    /// Unit price at the moment of adding.
    #[ts(type = "number")]
    pub price: Money,

    /// Opaque image reference, never interpreted by the cart.
    pub image: String,

    /// Heat level tag, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub spicy: Option<String>,

    /// Bottle size tag, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub size: Option<String>,
}

impl CartLineInput {
    /// Creates a validated cart line input without descriptive tags.
    ///
    /// ```rust
    /// use prohibition_core::{CartLineInput, Money};
    ///
    /// let input = CartLineInput::new(
    ///     "bugsy",
    ///     "Bugsy",
    ///     "Prohibition BBQ",
    ///     Money::from_cents(1299),
    ///     "/assets/bugsy-bottle-stock.jpg",
    /// )
    /// .unwrap()
    /// .with_spicy("Hot")
    /// .with_size("16oz");
    ///
    /// assert_eq!(input.spicy.as_deref(), Some("Hot"));
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subtitle: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> ValidationResult<Self> {
        let input = CartLineInput {
            id: id.into(),
            name: name.into(),
            subtitle: subtitle.into(),
            price,
            image: image.into(),
            spicy: None,
            size: None,
        };
        input.validate()?;
        Ok(input)
    }

    /// Sets the heat level tag.
    pub fn with_spicy(mut self, spicy: impl Into<String>) -> Self {
        self.spicy = Some(spicy.into());
        self
    }

    /// Sets the bottle size tag.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Re-checks the fields, e.g. after deserializing from the storefront.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_id(&self.id)?;
        validate_display_text("name", &self.name, true)?;
        validate_display_text("subtitle", &self.subtitle, false)?;
        validate_price_cents(self.price.cents())?;
        Ok(())
    }
}

/// Unchecked shape of a [`CartLineInput`] as it arrives over the wire.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartLineInputWire {
    id: String,
    name: String,
    subtitle: String,
    price: Money,
    image: String,
    #[serde(default)]
    spicy: Option<String>,
    #[serde(default)]
    size: Option<String>,
}

impl TryFrom<CartLineInputWire> for CartLineInput {
    type Error = ValidationError;

    fn try_from(wire: CartLineInputWire) -> Result<Self, Self::Error> {
        let input = CartLineInput {
            id: wire.id,
            name: wire.name,
            subtitle: wire.subtitle,
            price: wire.price,
            image: wire.image,
            spicy: wire.spicy,
            size: wire.size,
        };
        input.validate()?;
        Ok(input)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One product line in the cart.
///
/// ## Invariants
/// - `quantity >= 1` for as long as the line is in a cart
/// - `price`, `name`, `image` are frozen when the line is first added;
///   adding the same id again only bumps the quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    #[ts(type = "number")]
    pub price: Money,
    pub image: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub spicy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub size: Option<String>,
}

impl CartLine {
    /// Creates a fresh line with quantity 1.
    pub fn from_input(input: CartLineInput) -> Self {
        CartLine {
            id: input.id,
            name: input.name,
            subtitle: input.subtitle,
            price: input.price,
            image: input.image,
            quantity: 1,
            spicy: input.spicy,
            size: input.size,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Confirmation
// =============================================================================

/// What the shopper sees after the demo checkout. No payment is taken.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Order number shown on the thank-you screen.
    #[ts(as = "String")]
    pub order_number: Uuid,

    /// The lines that were in the cart when the order was placed.
    pub lines: Vec<CartLine>,

    /// Subtotal, shipping, tax and total at the moment of checkout.
    pub summary: OrderSummary,

    /// When the order was placed.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
