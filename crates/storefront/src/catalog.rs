//! Product catalog repository.
//!
//! The repository owns the authoritative in-memory product list and is the
//! only writer of the catalog key. Every mutation persists the whole list
//! back to storage (last writer wins across concurrent openers; there is
//! no locking).

use tracing::{debug, info};

use villa_markets_core::{Category, ProductId, ProductStatus};

use crate::error::CatalogError;
use crate::models::{Product, ProductDraft, ProductPatch};
use crate::storage::{KeyValueStore, keys};

/// Filter criteria for catalog queries. All supplied criteria must match.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Exact-match category.
    pub category: Option<Category>,
    /// Exact-match status.
    pub status: Option<ProductStatus>,
    /// Case-insensitive substring over name, code, and description.
    pub search_text: Option<String>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if self.category.is_some_and(|c| c != product.category) {
            return false;
        }
        if self.status.is_some_and(|s| s != product.status) {
            return false;
        }
        if let Some(needle) = &self.search_text {
            let needle = needle.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.code.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Repository over the stored product catalog.
pub struct CatalogRepository<S: KeyValueStore> {
    store: S,
    products: Vec<Product>,
}

impl<S: KeyValueStore> CatalogRepository<S> {
    /// Open the catalog, seeding `fixtures` if the store has no catalog yet.
    ///
    /// An absent catalog key means first run, not an error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the store cannot be read, the
    /// stored catalog is corrupt, or seeding cannot be persisted.
    pub fn open(store: S, fixtures: Vec<Product>) -> Result<Self, CatalogError> {
        let products = match store.get::<Vec<Product>>(keys::PRODUCTS)? {
            Some(products) => products,
            None => {
                info!(count = fixtures.len(), "Empty catalog, seeding fixtures");
                store.put(keys::PRODUCTS, &fixtures)?;
                fixtures
            }
        };
        debug!(count = products.len(), "Catalog loaded");
        Ok(Self { store, products })
    }

    /// Open the catalog without seeding anything; an absent key yields an
    /// empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the store cannot be read or the
    /// stored catalog is corrupt.
    pub fn open_unseeded(store: S) -> Result<Self, CatalogError> {
        let products = store.get::<Vec<Product>>(keys::PRODUCTS)?.unwrap_or_default();
        Ok(Self { store, products })
    }

    /// All products, in stored order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Create a product from `draft`, assigning the next free id
    /// (`max existing + 1`, or 1 for an empty catalog).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if persisting fails.
    pub fn create(&mut self, draft: ProductDraft) -> Result<&Product, CatalogError> {
        let next_id = self
            .products
            .iter()
            .map(|p| p.id.as_i32())
            .max()
            .map_or(1, |max| max + 1);
        let id = ProductId::new(next_id);
        let product = draft.into_product(id);
        info!(id = %id, name = %product.name, "Creating product");
        self.products.push(product);
        self.persist()?;
        self.products.last().ok_or(CatalogError::NotFound(id))
    }

    /// Apply a partial update to the product with `id`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has `id` (the
    /// catalog is left untouched), or `CatalogError::Storage` if
    /// persisting fails.
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> Result<&Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        if let Some(product) = self.products.get_mut(index) {
            patch.apply(product);
        }
        info!(id = %id, "Updated product");
        self.persist()?;
        self.products.get(index).ok_or(CatalogError::NotFound(id))
    }

    /// Delete the product with `id`, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has `id`, or
    /// `CatalogError::Storage` if persisting fails.
    pub fn delete(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let removed = self.products.remove(index);
        info!(id = %id, name = %removed.name, "Deleted product");
        self.persist()?;
        Ok(removed)
    }

    /// Products matching all supplied criteria.
    #[must_use]
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    fn persist(&self) -> Result<(), CatalogError> {
        self.store.put(keys::PRODUCTS, &self.products)?;
        Ok(())
    }
}
