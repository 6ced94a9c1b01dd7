//! # prohibition-store: Live Cart for a Storefront Session
//!
//! Wraps the pure reducer from `prohibition-core` in an owned store that UI
//! code can dispatch to and watch.
//!
//! ## Module Organization
//!
//! - [`store`] - `CartStore`: dispatch, subscribe, demo checkout
//! - [`config`] - Environment-driven configuration
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - Store and configuration errors
//!
//! ## Usage
//!
//! ```rust
//! use prohibition_core::Catalog;
//! use prohibition_store::{CartStore, StoreConfig};
//!
//! let store = CartStore::from_config(&StoreConfig::default());
//! let mut cart_badge = store.subscribe();
//!
//! store.add_product(&Catalog::lineup(), "baby-face").unwrap();
//!
//! assert!(cart_badge.has_changed().unwrap());
//! assert_eq!(cart_badge.borrow_and_update().total_items, 1);
//! ```

pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;

pub use config::StoreConfig;
pub use error::{ConfigError, StoreError, StoreResult};
pub use store::CartStore;
