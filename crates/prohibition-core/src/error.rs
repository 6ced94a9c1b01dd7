//! # Error Types
//!
//! Domain-specific error types for prohibition-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  prohibition-core errors (this file)                                   │
//! │  ├── CoreError        - Catalog lookups, checkout preconditions        │
//! │  └── ValidationError  - Malformed cart inputs and policy values        │
//! │                                                                         │
//! │  prohibition-store errors (separate crate)                             │
//! │  ├── ConfigError      - Unparsable environment values                  │
//! │  └── StoreError       - What the UI layer sees                         │
//! │                                                                         │
//! │  Flow: CoreError → StoreError → UI                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart reducer itself never returns an error: unknown ids and
//! non-positive quantities are normalized. Errors only appear at the edges,
//! where inputs are built or orders are placed.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product in the catalog has this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout was requested with nothing in the cart.
    ///
    /// The storefront only shows the checkout button for a non-empty cart,
    /// so this means the UI and store disagree about the cart contents.
    #[error("Cannot check out an empty cart")]
    EmptyCart,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., whitespace inside a product id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
