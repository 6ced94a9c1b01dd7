//! # Product Catalog
//!
//! The sauce lineup shown on the shop page, and the bridge from a product
//! card to the [`CartLineInput`] its "Add to cart" button dispatches.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CartLineInput;

/// Brand subtitle printed under every sauce name.
pub const BRAND_SUBTITLE: &str = "Prohibition BBQ";

/// A sauce listed in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    #[ts(type = "number")]
    pub price: Money,
    pub image: String,
    /// Flavor bullets ("Hickory Smoke", ...).
    pub features: Vec<String>,
    /// Heat level: Mild, Medium or Hot.
    pub spicy: String,
    pub size: String,
    /// Average review score out of 5.
    pub rating: f32,
}

impl Product {
    /// The cart input for one unit of this product.
    ///
    /// Catalog entries are trusted, so this skips the validating constructor.
    pub fn to_line_input(&self) -> CartLineInput {
        CartLineInput {
            id: self.id.clone(),
            name: self.name.clone(),
            subtitle: self.subtitle.clone(),
            price: self.price,
            image: self.image.clone(),
            spicy: Some(self.spicy.clone()),
            size: Some(self.size.clone()),
        }
    }
}

/// Products in listing order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from products in the order they should be listed.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The three house sauces.
    pub fn lineup() -> Self {
        Catalog::new(vec![
            sauce(
                "baby-face",
                "Baby Face",
                "Sweet & smoky with a hint of danger. This sauce captures the charm \
                 and complexity of the notorious Baby Face Nelson.",
                "/assets/baby-face-bottle-stock.jpg",
                &["Sweet Molasses Base", "Hickory Smoke", "Brown Sugar Finish"],
                "Mild",
                4.8,
            ),
            sauce(
                "godfather",
                "The Godfather",
                "Rich, bold, and commanding respect. A sauce worthy of the most \
                 powerful families in BBQ history.",
                "/assets/godfather-ribs-stock.jpg",
                &["Tomato & Bourbon", "Garlic & Herbs", "Premium Spices"],
                "Medium",
                4.9,
            ),
            sauce(
                "bugsy",
                "Bugsy",
                "Sharp, sophisticated, and unforgettable. Like its namesake, this \
                 sauce leaves a lasting impression.",
                "/assets/bugsy-bottle-stock.jpg",
                &["Tangy Vinegar Base", "Black Pepper", "Citrus Notes"],
                "Hot",
                4.7,
            ),
        ])
    }

    /// Looks a product up by id.
    pub fn get(&self, id: &str) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn sauce(
    id: &str,
    name: &str,
    description: &str,
    image: &str,
    features: &[&str],
    spicy: &str,
    rating: f32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        subtitle: BRAND_SUBTITLE.to_string(),
        description: description.to_string(),
        price: Money::from_major_minor(12, 99),
        image: image.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        spicy: spicy.to_string(),
        size: "16oz".to_string(),
        rating,
    }
}
