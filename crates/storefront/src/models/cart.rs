//! Shopping cart line items.

use serde::{Deserialize, Serialize};

use villa_markets_core::{Money, ProductId};

use super::Product;

/// One product-plus-quantity entry in the cart.
///
/// Name, price, and image are snapshots taken when the product was added;
/// later catalog edits do not rewrite existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id at add time. Not validated against the catalog on read.
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Money,
    #[serde(rename = "imagen")]
    pub image: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    /// Name of the store the product was offered from, when known.
    #[serde(rename = "minimarket", default, skip_serializing_if = "Option::is_none")]
    pub source_store: Option<String>,
}

impl CartLine {
    /// Snapshot a product into a new line with the given quantity.
    #[must_use]
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            source_store: None,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul_quantity(self.quantity)
    }
}
