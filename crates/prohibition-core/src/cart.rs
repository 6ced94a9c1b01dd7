//! # Cart Reducer
//!
//! The cart as a pure state machine: one state value, four transitions.
//!
//! ## Transition Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transitions                                     │
//! │                                                                         │
//! │  Action                     Line present?      Result                   │
//! │  ──────                     ─────────────      ──────                   │
//! │  AddItem(input)             yes                quantity += 1            │
//! │                             no                 append, quantity = 1     │
//! │  RemoveItem(id)             yes                line dropped             │
//! │                             no                 unchanged                │
//! │  UpdateQuantity(id, q > 0)  yes                quantity = q             │
//! │                             no                 unchanged                │
//! │  UpdateQuantity(id, q <= 0) -                  same as RemoveItem(id)   │
//! │  ClearCart                  -                  empty cart               │
//! │                                                                         │
//! │  Every transition recomputes total_items and total_price.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No transition can fail. Inputs that make no sense (unknown ids,
//! zero or negative quantities) are normalized rather than rejected.
//!
//! ## Example
//! ```rust
//! use prohibition_core::cart::{reduce, CartAction, CartState};
//! use prohibition_core::{CartLineInput, Money};
//!
//! let sauce = CartLineInput::new("bugsy", "Bugsy", "Prohibition BBQ",
//!     Money::from_cents(1299), "/bugsy.jpg").unwrap();
//!
//! let state = reduce(&CartState::empty(), CartAction::AddItem(sauce.clone()));
//! let state = reduce(&state, CartAction::AddItem(sauce));
//! assert_eq!(state.total_items, 2);
//! assert_eq!(state.total_price.cents(), 2598);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartLine, CartLineInput};

// =============================================================================
// Cart State
// =============================================================================

/// The cart aggregate.
///
/// ## Invariants
/// - No two lines share an `id`
/// - Every line has `quantity >= 1`
/// - `total_items` is the sum of line quantities
/// - `total_price` is the sum of line totals
///
/// Only [`reduce`] produces new states, and it recomputes both totals on
/// every transition, so the invariants hold for any state it returns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Lines in the order they were first added.
    pub items: Vec<CartLine>,

    /// Sum of all quantities.
    pub total_items: i64,

    /// Sum of `price * quantity` across lines.
    #[ts(type = "number")]
    pub total_price: Money,
}

impl CartState {
    /// The initial state: no lines, zero totals.
    pub fn empty() -> Self {
        CartState::default()
    }

    /// Builds a state from lines, deriving both totals.
    fn from_items(items: Vec<CartLine>) -> Self {
        let total_items = items
            .iter()
            .fold(0i64, |sum, line| sum.saturating_add(line.quantity));
        let total_price = items.iter().map(CartLine::line_total).sum();

        CartState {
            items,
            total_items,
            total_price,
        }
    }

    /// Looks up a line by product id.
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Quantity of the given product, or 0 when it is not in the cart.
    pub fn quantity_of(&self, id: &str) -> i64 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// Every way the cart can change.
///
/// Serializes in the storefront's action shape:
/// `{"type": "UPDATE_QUANTITY", "payload": {"id": "bugsy", "quantity": 3}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add one unit of a product.
    AddItem(CartLineInput),

    /// Drop a product's line.
    RemoveItem(String),

    /// Set a product's quantity; zero or below removes the line.
    UpdateQuantity { id: String, quantity: i64 },

    /// Empty the cart.
    ClearCart,
}

impl CartAction {
    /// Short action name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::ClearCart => "clear_cart",
        }
    }

    /// The product id the action targets, if any.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            CartAction::AddItem(input) => Some(&input.id),
            CartAction::RemoveItem(id) | CartAction::UpdateQuantity { id, .. } => Some(id),
            CartAction::ClearCart => None,
        }
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies an action to a state and returns the next state.
///
/// Pure: the previous state is left untouched and the result depends only
/// on the arguments.
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem(input) => add_item(state, input),
        CartAction::RemoveItem(id) => remove_item(state, &id),
        CartAction::UpdateQuantity { id, quantity } => update_quantity(state, &id, quantity),
        CartAction::ClearCart => CartState::empty(),
    }
}

fn add_item(state: &CartState, input: CartLineInput) -> CartState {
    let mut items = state.items.clone();

    // Existing line wins: only the quantity changes on a repeat add
    match items.iter_mut().find(|line| line.id == input.id) {
        Some(line) => line.quantity = line.quantity.saturating_add(1),
        None => items.push(CartLine::from_input(input)),
    }

    CartState::from_items(items)
}

fn remove_item(state: &CartState, id: &str) -> CartState {
    let items = state
        .items
        .iter()
        .filter(|line| line.id != id)
        .cloned()
        .collect();

    CartState::from_items(items)
}

fn update_quantity(state: &CartState, id: &str, quantity: i64) -> CartState {
    if quantity <= 0 {
        return remove_item(state, id);
    }

    let items = state
        .items
        .iter()
        .map(|line| {
            if line.id == id {
                CartLine {
                    quantity,
                    ..line.clone()
                }
            } else {
                line.clone()
            }
        })
        .collect();

    CartState::from_items(items)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sauce(id: &str, price_cents: i64) -> CartLineInput {
        CartLineInput::new(
            id,
            format!("Sauce {}", id),
            "Prohibition BBQ",
            Money::from_cents(price_cents),
            format!("/assets/{}.jpg", id),
        )
        .unwrap()
    }

    fn add(state: &CartState, id: &str, price_cents: i64) -> CartState {
        reduce(state, CartAction::AddItem(sauce(id, price_cents)))
    }

    fn update(state: &CartState, id: &str, quantity: i64) -> CartState {
        reduce(
            state,
            CartAction::UpdateQuantity {
                id: id.to_string(),
                quantity,
            },
        )
    }

    #[test]
    fn test_add_fresh_id_appends_line() {
        let state = add(&CartState::empty(), "a", 1000);

        assert_eq!(state.line_count(), 1);
        assert_eq!(state.quantity_of("a"), 1);
        assert_eq!(state.total_items, 1);
        assert_eq!(state.total_price.cents(), 1000);
    }

    #[test]
    fn test_add_existing_id_increments_quantity() {
        let state = add(&CartState::empty(), "a", 1000);
        let state = add(&state, "b", 500);
        let state = add(&state, "a", 1000);

        assert_eq!(state.line_count(), 2);
        assert_eq!(state.quantity_of("a"), 2);
        // Insertion order is kept
        assert_eq!(state.items[0].id, "a");
        assert_eq!(state.items[1].id, "b");
    }

    #[test]
    fn test_repeat_add_keeps_original_price() {
        let state = add(&CartState::empty(), "a", 1000);
        let state = add(&state, "a", 9999);

        assert_eq!(state.line("a").unwrap().price.cents(), 1000);
        assert_eq!(state.total_price.cents(), 2000);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let state = add(&CartState::empty(), "a", 1000);
        let state = update(&state, "a", 5);

        assert_eq!(state.quantity_of("a"), 5);
        assert_eq!(state.total_items, 5);
        assert_eq!(state.total_price.cents(), 5000);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let state = add(&CartState::empty(), "a", 1000);
        assert_eq!(update(&state, "zzz", 3), state);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes_line() {
        let state = add(&CartState::empty(), "a", 1000);
        let state = add(&state, "b", 250);
        let removed = reduce(&state, CartAction::RemoveItem("a".to_string()));

        assert_eq!(update(&state, "a", 0), removed);
        assert_eq!(update(&state, "a", -5), removed);
        assert_eq!(removed.total_items, 1);
        assert_eq!(removed.total_price.cents(), 250);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let state = add(&CartState::empty(), "a", 1000);
        let after = reduce(&state, CartAction::RemoveItem("nope".to_string()));
        assert_eq!(after, state);
    }

    #[test]
    fn test_clear_cart_empties_everything() {
        let state = add(&CartState::empty(), "a", 1000);
        let state = update(&state, "a", 7);
        let cleared = reduce(&state, CartAction::ClearCart);

        assert!(cleared.is_empty());
        assert_eq!(cleared.total_items, 0);
        assert!(cleared.total_price.is_zero());
    }

    #[test]
    fn test_reduce_leaves_previous_state_untouched() {
        let before = add(&CartState::empty(), "a", 1000);
        let snapshot = before.clone();
        let _ = add(&before, "a", 1000);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_scenario_add_add_update_remove() {
        let state = add(&CartState::empty(), "a", 1000);
        assert_eq!((state.line_count(), state.total_items), (1, 1));
        assert_eq!(state.total_price.cents(), 1000);

        let state = add(&state, "a", 1000);
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.quantity_of("a"), 2);
        assert_eq!(state.total_items, 2);
        assert_eq!(state.total_price.cents(), 2000);

        let state = update(&state, "a", 5);
        assert_eq!(state.quantity_of("a"), 5);
        assert_eq!(state.total_price.cents(), 5000);

        let state = reduce(&state, CartAction::RemoveItem("a".to_string()));
        assert!(state.is_empty());
        assert_eq!(state.total_items, 0);
        assert!(state.total_price.is_zero());
    }

    #[test]
    fn test_action_json_matches_storefront_shape() {
        let action = CartAction::UpdateQuantity {
            id: "bugsy".to_string(),
            quantity: 3,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "UPDATE_QUANTITY");
        assert_eq!(json["payload"]["id"], "bugsy");
        assert_eq!(json["payload"]["quantity"], 3);

        let clear: CartAction = serde_json::from_str(r#"{"type":"CLEAR_CART"}"#).unwrap();
        assert_eq!(clear, CartAction::ClearCart);

        let remove: CartAction =
            serde_json::from_str(r#"{"type":"REMOVE_ITEM","payload":"bugsy"}"#).unwrap();
        assert_eq!(remove.target_id(), Some("bugsy"));
    }

    #[test]
    fn test_state_json_uses_camel_case_totals() {
        let state = add(&CartState::empty(), "a", 1000);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["totalPrice"], 10.0);
    }

    // -------------------------------------------------------------------------
    // Property tests
    // -------------------------------------------------------------------------

    fn arb_action() -> impl Strategy<Value = CartAction> {
        // A small id pool so sequences revisit the same lines
        let id = prop::sample::select(vec!["a", "b", "c", "d"]);
        prop_oneof![
            4 => (id.clone(), 0i64..5_000).prop_map(|(id, price)| CartAction::AddItem(sauce(id, price))),
            2 => id.clone().prop_map(|id| CartAction::RemoveItem(id.to_string())),
            3 => (id, -10i64..50).prop_map(|(id, quantity)| CartAction::UpdateQuantity {
                id: id.to_string(),
                quantity,
            }),
            1 => Just(CartAction::ClearCart),
        ]
    }

    fn assert_invariants(state: &CartState) {
        let quantities: i64 = state.items.iter().map(|l| l.quantity).sum();
        let price: i64 = state.items.iter().map(|l| l.price.cents() * l.quantity).sum();
        assert_eq!(state.total_items, quantities);
        assert_eq!(state.total_price.cents(), price);
        assert!(state.items.iter().all(|l| l.quantity >= 1));

        let mut ids: Vec<&str> = state.items.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.items.len(), "duplicate line ids");
    }

    proptest! {
        /// Totals and uniqueness hold after every step of any sequence.
        #[test]
        fn invariants_hold_for_any_sequence(actions in prop::collection::vec(arb_action(), 0..60)) {
            let mut state = CartState::empty();
            for action in actions {
                state = reduce(&state, action);
                assert_invariants(&state);
            }
        }

        /// AddItem grows the cart by one line or one unit, never both.
        #[test]
        fn add_item_grows_by_exactly_one(
            actions in prop::collection::vec(arb_action(), 0..30),
            price in 0i64..5_000,
        ) {
            let state = actions.into_iter().fold(CartState::empty(), |s, a| reduce(&s, a));
            let existed = state.line("a").is_some();
            let before_qty = state.quantity_of("a");

            let next = add(&state, "a", price);

            prop_assert_eq!(next.quantity_of("a"), before_qty + 1);
            prop_assert_eq!(next.total_items, state.total_items + 1);
            if existed {
                prop_assert_eq!(next.line_count(), state.line_count());
            } else {
                prop_assert_eq!(next.line_count(), state.line_count() + 1);
            }
        }

        /// Non-positive updates are indistinguishable from removal.
        #[test]
        fn non_positive_update_equals_remove(
            actions in prop::collection::vec(arb_action(), 0..30),
            quantity in -100i64..=0,
        ) {
            let state = actions.into_iter().fold(CartState::empty(), |s, a| reduce(&s, a));
            let removed = reduce(&state, CartAction::RemoveItem("b".to_string()));
            prop_assert_eq!(update(&state, "b", quantity), removed);
        }

        /// ClearCart always lands on the empty aggregate.
        #[test]
        fn clear_always_empties(actions in prop::collection::vec(arb_action(), 0..30)) {
            let state = actions.into_iter().fold(CartState::empty(), |s, a| reduce(&s, a));
            prop_assert_eq!(reduce(&state, CartAction::ClearCart), CartState::empty());
        }
    }
}
