//! Catalog product records.

use serde::{Deserialize, Serialize};

use villa_markets_core::{Category, Money, ProductId, ProductStatus};

/// A product in the catalog.
///
/// `stock` and `status` are independently settable: a zero stock does not
/// force `OutOfStock` and nothing reconciles the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "precio")]
    pub price: Money,
    pub stock: u32,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "imagen")]
    pub image: String,
    #[serde(rename = "estado")]
    pub status: ProductStatus,
    #[serde(rename = "destacado")]
    pub featured: bool,
}

/// Fields for a product about to be created; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub code: String,
    pub name: String,
    pub category: Category,
    pub price: Money,
    pub stock: u32,
    pub description: String,
    pub image: String,
    pub status: ProductStatus,
    pub featured: bool,
}

impl ProductDraft {
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            code: self.code,
            name: self.name,
            category: self.category,
            price: self.price,
            stock: self.stock,
            description: self.description,
            image: self.image,
            status: self.status,
            featured: self.featured,
        }
    }
}

/// Partial update for an existing product. `None` fields are preserved.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Money>,
    pub stock: Option<u32>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<ProductStatus>,
    pub featured: Option<bool>,
}

impl ProductPatch {
    /// Apply this patch to `product`, replacing only the supplied fields.
    pub(crate) fn apply(self, product: &mut Product) {
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
    }
}
