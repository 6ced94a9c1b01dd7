//! # Cart Demo
//!
//! Walks a shopper through the cart: adds, updates, removes, then places a
//! demo order and prints it as JSON.
//!
//! ## Usage
//! ```bash
//! cargo run -p prohibition-store --bin cart-demo
//!
//! # Different shipping threshold, quieter logs
//! PROHIBITION_FREE_SHIPPING_THRESHOLD_CENTS=5000 RUST_LOG=warn \
//!     cargo run -p prohibition-store --bin cart-demo
//! ```

use prohibition_core::Catalog;
use prohibition_store::telemetry::init_tracing;
use prohibition_store::{CartStore, StoreConfig};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = StoreConfig::load()?;
    init_tracing(&config.log_filter)?;

    info!(
        free_shipping_threshold = %config.policy.free_shipping_threshold(),
        flat_shipping = %config.policy.flat_shipping(),
        tax_bps = config.policy.tax_rate().bps(),
        "Configuration loaded"
    );

    let catalog = Catalog::lineup();
    let store = CartStore::from_config(&config);

    // Shopper adds The Godfather twice, bumps it to five, then changes their mind
    store.add_product(&catalog, "godfather")?;
    store.add_product(&catalog, "godfather")?;
    store.update_quantity("godfather", 5);
    store.remove_item("godfather");

    for product in catalog.products() {
        store.add_product(&catalog, &product.id)?;
    }

    let summary = store.summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if !summary.ships_free() {
        let remaining = store
            .policy()
            .remaining_for_free_shipping(summary.subtotal);
        info!(%remaining, "Add more for free shipping");
    }

    let confirmation = store.checkout()?;
    println!("{}", serde_json::to_string_pretty(&confirmation)?);
    println!(
        "Thank you for your order! This is a demo - no actual payment was processed."
    );

    Ok(())
}
