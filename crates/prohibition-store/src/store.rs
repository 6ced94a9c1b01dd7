//! # Cart Store
//!
//! The live cart a storefront session talks to.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Event               Store Method            Transition              │
//! │  ────────               ────────────            ──────────              │
//! │                                                                         │
//! │  "Add to cart" ────────► add_item() ──────────► AddItem                 │
//! │                                                                         │
//! │  − / + / typed qty ────► update_quantity() ───► UpdateQuantity          │
//! │                                                                         │
//! │  Trash icon ───────────► remove_item() ───────► RemoveItem              │
//! │                                                                         │
//! │  "Clear cart" ─────────► clear_cart() ────────► ClearCart               │
//! │                                                                         │
//! │  "Checkout" ───────────► checkout() ──────────► snapshot + ClearCart    │
//! │                                                                         │
//! │  Cart badge, cart page ► state() / subscribe()  (read only)             │
//! │                                                                         │
//! │  NOTE: Every write goes through one watch::Sender, which applies        │
//! │        modifications one at a time under its internal lock.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A `CartStore` is an ordinary value: construct one per session and hand
//! it (or an `Arc` of it) to the UI layer. There is no global cart.

use std::sync::Arc;

use chrono::Utc;
use prohibition_core::{
    reduce, CartAction, CartLineInput, CartState, Catalog, CheckoutPolicy, CoreError,
    OrderConfirmation, OrderSummary,
};
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::StoreResult;

/// Owned cart state with serialized dispatch and change notification.
#[derive(Debug)]
pub struct CartStore {
    state: watch::Sender<Arc<CartState>>,
    policy: CheckoutPolicy,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new(policy: CheckoutPolicy) -> Self {
        let (state, _) = watch::channel(Arc::new(CartState::empty()));
        CartStore { state, policy }
    }

    /// Creates a store using the configured checkout policy.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.policy)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Applies an action and returns the state it produced.
    ///
    /// Subscribers are notified once the new state is in place.
    pub fn dispatch(&self, action: CartAction) -> Arc<CartState> {
        let name = action.name();
        let target = action.target_id().map(str::to_owned);

        let mut next: Arc<CartState> = Arc::default();
        self.state.send_modify(|current| {
            next = Arc::new(reduce(&**current, action));
            *current = Arc::clone(&next);
        });

        debug!(
            action = name,
            id = ?target,
            lines = next.line_count(),
            total_items = next.total_items,
            total_price = %next.total_price,
            "cart action dispatched"
        );

        next
    }

    /// Adds one unit of a product.
    pub fn add_item(&self, line: CartLineInput) -> Arc<CartState> {
        self.dispatch(CartAction::AddItem(line))
    }

    /// Removes a product's line; unknown ids are ignored.
    pub fn remove_item(&self, id: &str) -> Arc<CartState> {
        self.dispatch(CartAction::RemoveItem(id.to_string()))
    }

    /// Sets a product's quantity; zero or below removes the line.
    pub fn update_quantity(&self, id: &str, quantity: i64) -> Arc<CartState> {
        self.dispatch(CartAction::UpdateQuantity {
            id: id.to_string(),
            quantity,
        })
    }

    /// Empties the cart.
    pub fn clear_cart(&self) -> Arc<CartState> {
        self.dispatch(CartAction::ClearCart)
    }

    /// Adds one unit of a catalog product by id.
    pub fn add_product(&self, catalog: &Catalog, id: &str) -> StoreResult<Arc<CartState>> {
        let product = catalog.get(id)?;
        Ok(self.add_item(product.to_line_input()))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current cart snapshot.
    pub fn state(&self) -> Arc<CartState> {
        self.state.borrow().clone()
    }

    /// Watches the cart.
    ///
    /// The receiver always yields the latest state; a slow reader may skip
    /// intermediate states but never sees a stale one after `changed()`.
    pub fn subscribe(&self) -> watch::Receiver<Arc<CartState>> {
        self.state.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    pub fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }

    /// Order summary for the current cart.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::for_cart(&self.state(), &self.policy)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Places a demo order: no payment is taken.
    ///
    /// The cart is captured and cleared in a single step, so an add racing
    /// with checkout either makes it into the order or stays in the cart.
    pub fn checkout(&self) -> StoreResult<OrderConfirmation> {
        let mut taken = None;
        self.state.send_if_modified(|current| {
            if current.is_empty() {
                return false;
            }
            taken = Some(std::mem::replace(current, Arc::new(CartState::empty())));
            true
        });

        let cart = taken.ok_or(CoreError::EmptyCart)?;
        let confirmation = OrderConfirmation {
            order_number: Uuid::new_v4(),
            lines: cart.items.clone(),
            summary: OrderSummary::for_cart(&cart, &self.policy),
            placed_at: Utc::now(),
        };

        info!(
            order_number = %confirmation.order_number,
            total_items = confirmation.summary.total_items,
            total = %confirmation.summary.total,
            "demo order placed"
        );

        Ok(confirmation)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(CheckoutPolicy::default())
    }
}
