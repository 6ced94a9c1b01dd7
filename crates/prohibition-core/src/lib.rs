//! # prohibition-core: Pure Cart Logic for the Prohibition BBQ Storefront
//!
//! This crate is the **heart** of the storefront's cart. It contains all
//! cart logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Prohibition BBQ Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront (web UI)                          │   │
//! │  │    Shop page ──► Cart badge ──► Cart page ──► Thank-you screen  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch / subscribe                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    prohibition-store                            │   │
//! │  │    CartStore: owned state, serialized dispatch, watchers        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ prohibition-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  types   │ │   cart   │ │ catalog  │ │ checkout │          │   │
//! │  │   │ CartLine │ │ reduce() │ │ Product  │ │ Summary  │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Cart lines, line inputs, tax rates, order confirmations
//! - [`cart`] - `CartState`, `CartAction`, and the `reduce` function
//! - [`catalog`] - The sauce lineup
//! - [`checkout`] - Shipping/tax policy and order summaries
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation for inputs and policies
//!
//! ## Example Usage
//!
//! ```rust
//! use prohibition_core::cart::{reduce, CartAction, CartState};
//! use prohibition_core::catalog::Catalog;
//! use prohibition_core::checkout::{CheckoutPolicy, OrderSummary};
//!
//! let catalog = Catalog::lineup();
//! let godfather = catalog.get("godfather").unwrap().to_line_input();
//!
//! let cart = reduce(&CartState::empty(), CartAction::AddItem(godfather));
//! let summary = OrderSummary::for_cart(&cart, &CheckoutPolicy::default());
//!
//! assert_eq!(summary.subtotal.cents(), 1299);
//! assert_eq!(summary.shipping.cents(), 499); // under the $35 threshold
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{reduce, CartAction, CartState};
pub use catalog::{Catalog, Product};
pub use checkout::{CheckoutPolicy, OrderSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
