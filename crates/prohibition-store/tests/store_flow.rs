//! End-to-end cart flows through `CartStore`.

use std::sync::Arc;
use std::thread;

use prohibition_core::{CartAction, CartLineInput, Catalog, Money};
use prohibition_store::{CartStore, StoreConfig};

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

#[test]
fn scenario_add_add_update_remove() {
    let store = CartStore::default();

    let state = store.add_item(sauce("a", 1000));
    assert_eq!(state.line_count(), 1);
    assert_eq!(state.total_items, 1);
    assert_eq!(state.total_price.cents(), 1000);

    let state = store.add_item(sauce("a", 1000));
    assert_eq!(state.line_count(), 1);
    assert_eq!(state.quantity_of("a"), 2);
    assert_eq!(state.total_items, 2);
    assert_eq!(state.total_price.cents(), 2000);

    let state = store.update_quantity("a", 5);
    assert_eq!(state.quantity_of("a"), 5);
    assert_eq!(state.total_price.cents(), 5000);

    let state = store.remove_item("a");
    assert!(state.is_empty());
    assert_eq!(state.total_items, 0);
    assert!(state.total_price.is_zero());
}

#[test]
fn clear_cart_resets_regardless_of_prior_state() {
    let store = CartStore::default();
    let catalog = Catalog::lineup();
    for product in catalog.products() {
        store.add_product(&catalog, &product.id).unwrap();
    }
    store.update_quantity("bugsy", 12);

    let state = store.clear_cart();

    assert!(state.is_empty());
    assert_eq!(state.total_items, 0);
    assert!(state.total_price.is_zero());
}

#[test]
fn storefront_json_actions_drive_the_store() {
    let store = CartStore::default();
    let actions = [
        r#"{"type":"ADD_ITEM","payload":{"id":"bugsy","name":"Bugsy","subtitle":"Prohibition BBQ","price":12.99,"image":"/bugsy.jpg","spicy":"Hot","size":"16oz"}}"#,
        r#"{"type":"UPDATE_QUANTITY","payload":{"id":"bugsy","quantity":3}}"#,
        r#"{"type":"REMOVE_ITEM","payload":"nobody"}"#,
    ];

    for raw in actions {
        let action: CartAction = serde_json::from_str(raw).unwrap();
        store.dispatch(action);
    }

    let state = store.state();
    assert_eq!(state.quantity_of("bugsy"), 3);
    assert_eq!(state.total_price.cents(), 3897);
    assert_eq!(state.line("bugsy").unwrap().spicy.as_deref(), Some("Hot"));
}

#[test]
fn storefront_json_rejects_malformed_add_item() {
    let store = CartStore::default();
    let malformed = [
        r#"{"type":"ADD_ITEM","payload":{"id":"bugsy","name":"Bugsy","subtitle":"Prohibition BBQ","price":-12.99,"image":"/bugsy.jpg"}}"#,
        r#"{"type":"ADD_ITEM","payload":{"id":"","name":"Bugsy","subtitle":"Prohibition BBQ","price":12.99,"image":"/bugsy.jpg"}}"#,
    ];

    for raw in malformed {
        let parsed = serde_json::from_str::<CartAction>(raw);
        assert!(parsed.is_err(), "accepted {}", raw);
        if let Ok(action) = parsed {
            store.dispatch(action);
        }
    }

    assert!(store.state().is_empty());
}

#[test]
fn concurrent_dispatch_loses_no_updates() {
    let store = Arc::new(CartStore::default());
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let id = format!("sauce-{}", n % 4);
                for _ in 0..50 {
                    store.add_item(sauce(&id, 100));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let state = store.state();
    assert_eq!(state.line_count(), 4);
    assert_eq!(state.total_items, 400);
    assert_eq!(state.total_price.cents(), 40_000);
    assert!(state.items.iter().all(|line| line.quantity == 100));
}

#[test]
fn checkout_uses_configured_policy() {
    let config = StoreConfig::from_lookup(|var| match var {
        "PROHIBITION_FREE_SHIPPING_THRESHOLD_CENTS" => Some("10000".to_string()),
        "PROHIBITION_TAX_RATE_BPS" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();
    let store = CartStore::from_config(&config);
    let catalog = Catalog::lineup();
    for product in catalog.products() {
        store.add_product(&catalog, &product.id).unwrap();
    }

    let confirmation = store.checkout().unwrap();

    assert_eq!(confirmation.summary.subtotal.cents(), 3897);
    assert_eq!(confirmation.summary.shipping.cents(), 499);
    assert!(confirmation.summary.tax.is_zero());
    assert_eq!(confirmation.summary.total.cents(), 4396);
    assert_eq!(confirmation.lines.len(), 3);
    assert!(store.state().is_empty());

    let json = serde_json::to_value(&confirmation).unwrap();
    assert!(json["orderNumber"].is_string());
    assert_eq!(json["summary"]["total"], 43.96);
}

#[tokio::test]
async fn subscriber_wakes_on_dispatch() {
    let store = Arc::new(CartStore::default());
    let mut rx = store.subscribe();

    let writer = Arc::clone(&store);
    let task = tokio::spawn(async move {
        writer.add_item(sauce("godfather", 1299));
    });

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().quantity_of("godfather"), 1);
    task.await.unwrap();
}

#[tokio::test]
async fn subscriber_reads_latest_state_after_burst() {
    let store = CartStore::default();
    let mut rx = store.subscribe();

    for quantity in 1..=10 {
        store.add_item(sauce("a", 100));
        store.update_quantity("a", quantity * 2);
    }

    rx.changed().await.unwrap();
    let latest = rx.borrow_and_update().clone();
    assert_eq!(latest.quantity_of("a"), 20);
    assert_eq!(latest.total_price.cents(), 2000);
}
