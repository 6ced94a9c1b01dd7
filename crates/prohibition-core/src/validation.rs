//! # Validation Module
//!
//! Input validation for values that enter the cart from outside.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront (TypeScript)                                      │
//! │  └── Product cards only offer "Add to cart" for listed sauces          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CartLineInput::new / CheckoutPolicy::new                     │
//! │  └── THIS MODULE: ids, names, prices, policy values                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart reducer                                                 │
//! │  └── Total over well-formed inputs; normalizes quantities              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use prohibition_core::validation::{validate_product_id, validate_price_cents};
//!
//! assert!(validate_product_id("baby-face").is_ok());
//! assert!(validate_price_cents(1299).is_ok());
//! assert!(validate_price_cents(-1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product id.
pub const MAX_PRODUCT_ID_LEN: usize = 64;

/// Longest accepted display string (name, subtitle).
pub const MAX_DISPLAY_LEN: usize = 200;

/// Upper bound for a tax rate: 10000 bps = 100%.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id (the cart's line key).
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - No whitespace (ids appear in URLs such as `/shop#baby-face`)
///
/// ```rust
/// use prohibition_core::validation::validate_product_id;
///
/// assert!(validate_product_id("godfather").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("the godfather").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a display string such as a product name.
///
/// `required` controls whether an empty (or blank) value is accepted;
/// subtitles may be empty, names may not.
pub fn validate_display_text(field: &str, value: &str, required: bool) -> ValidationResult<()> {
    if required && value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_DISPLAY_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_DISPLAY_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// Zero is allowed (free samples); negative prices are not.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    validate_non_negative_cents("price", cents)
}

/// Validates any non-negative amount of money, naming the field in the error.
pub fn validate_non_negative_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_TAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
