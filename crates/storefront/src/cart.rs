//! Shopping cart service.
//!
//! The cart stores line-item snapshots: name, price, and image are copied
//! from the product when it is added, so later catalog edits never rewrite
//! lines already in the cart. Lines are unique per product id; adding the
//! same product again increments its quantity.
//!
//! # Key migration
//!
//! The site historically wrote the cart under two keys, `carrito` and
//! `carritoVillaMarkets`, which let readers and writers disagree. The
//! canonical key is now `carritoVillaMarkets`; the legacy key is read once
//! as a fallback when the canonical key is absent and removed on the next
//! save.

use tracing::{debug, info};

use villa_markets_core::{Money, ProductId};

use crate::error::CartError;
use crate::models::{CartLine, Product};
use crate::storage::{KeyValueStore, keys};

/// Service owning the in-memory cart, persisting after each mutation.
pub struct CartService<S: KeyValueStore> {
    store: S,
    lines: Vec<CartLine>,
}

impl<S: KeyValueStore> CartService<S> {
    /// Load the cart from storage; an absent cart is empty.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the store cannot be read or a
    /// stored cart is corrupt.
    pub fn load(store: S) -> Result<Self, CartError> {
        let lines = match store.get::<Vec<CartLine>>(keys::CART)? {
            Some(lines) => lines,
            None => match store.get::<Vec<CartLine>>(keys::CART_LEGACY)? {
                Some(lines) => {
                    info!(count = lines.len(), "Migrating cart from legacy key");
                    lines
                }
                None => Vec::new(),
            },
        };
        debug!(lines = lines.len(), "Cart loaded");
        Ok(Self { store, lines })
    }

    /// Add `quantity` of `product` to the cart.
    ///
    /// Increments the existing line for the product id, or appends a new
    /// snapshot line. A zero quantity is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if persisting fails.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Ok(());
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine::snapshot(product, quantity));
        }
        info!(id = %product.id, name = %product.name, quantity, "Added to cart");
        self.persist()
    }

    /// Remove the line for `product_id`, if present.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if persisting fails.
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<(), CartError> {
        self.lines.retain(|l| l.id != product_id);
        self.persist()
    }

    /// Set the quantity of the line for `product_id`. A quantity of zero
    /// removes the line. Setting a quantity for an absent line is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if persisting fails.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product_id) {
            line.quantity = quantity;
        }
        self.persist()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if persisting fails.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.lines.clear();
        self.persist()
    }

    /// Current line items.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total quantity across all lines (the cart badge number).
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn persist(&self) -> Result<(), CartError> {
        self.store.put(keys::CART, &self.lines)?;
        // Anything still under the legacy key is stale from here on.
        self.store.remove(keys::CART_LEGACY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use villa_markets_core::{Category, ProductStatus};

    use crate::storage::MemoryStore;

    fn product(id: i32, name: &str, pesos: i64) -> Product {
        Product {
            id: ProductId::new(id),
            code: format!("P{id:03}"),
            name: name.to_owned(),
            category: Category::Groceries,
            price: Money::from_pesos(pesos),
            stock: 10,
            description: String::new(),
            image: format!("img/{id}.jpg"),
            status: ProductStatus::Active,
            featured: false,
        }
    }

    #[test]
    fn test_add_merges_lines_per_product() {
        let store = MemoryStore::new();
        let mut cart = CartService::load(&store).expect("load");
        let rice = product(1, "Arroz", 1300);
        let milk = product(2, "Leche", 1200);

        cart.add_item(&rice, 1).expect("add");
        cart.add_item(&milk, 2).expect("add");
        cart.add_item(&rice, 3).expect("add");

        assert_eq!(cart.lines().len(), 2, "one line per product id");
        assert_eq!(cart.total_item_count(), 6);
        let rice_line = cart
            .lines()
            .iter()
            .find(|l| l.id == ProductId::new(1))
            .expect("rice line");
        assert_eq!(rice_line.quantity, 4);
    }

    #[test]
    fn test_total_item_count_sums_quantities() {
        let store = MemoryStore::new();
        let mut cart = CartService::load(&store).expect("load");
        for (id, qty) in [(1, 2u32), (2, 5), (3, 1)] {
            cart.add_item(&product(id, "p", 100), qty).expect("add");
        }
        assert_eq!(cart.total_item_count(), 8);
    }

    #[test]
    fn test_lines_snapshot_price_at_add_time() {
        let store = MemoryStore::new();
        let mut cart = CartService::load(&store).expect("load");
        let mut milk = product(2, "Leche", 1200);
        cart.add_item(&milk, 1).expect("add");

        // A later catalog price change must not rewrite the existing line.
        milk.price = Money::from_pesos(1500);
        let line = cart.lines().first().expect("line");
        assert_eq!(line.price, Money::from_pesos(1200));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let store = MemoryStore::new();
        let mut cart = CartService::load(&store).expect("load");
        cart.add_item(&product(1, "p", 100), 3).expect("add");

        cart.set_quantity(ProductId::new(1), 0).expect("set");
        assert!(cart.lines().is_empty());
        assert_eq!(cart.total_item_count(), 0);
    }

    #[test]
    fn test_every_present_line_has_positive_quantity() {
        let store = MemoryStore::new();
        let mut cart = CartService::load(&store).expect("load");
        cart.add_item(&product(1, "p", 100), 2).expect("add");
        cart.add_item(&product(2, "q", 100), 0).expect("zero add is no-op");
        cart.set_quantity(ProductId::new(1), 5).expect("set");

        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_subtotal() {
        let store = MemoryStore::new();
        let mut cart = CartService::load(&store).expect("load");
        cart.add_item(&product(1, "Arroz", 1300), 2).expect("add");
        cart.add_item(&product(2, "Leche", 1200), 1).expect("add");
        assert_eq!(cart.subtotal(), Money::from_pesos(3800));
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        let mut cart = CartService::load(&store).expect("load");
        cart.add_item(&product(1, "p", 100), 2).expect("add");
        cart.clear().expect("clear");
        assert!(cart.lines().is_empty());

        let reloaded = CartService::load(&store).expect("reload");
        assert!(reloaded.lines().is_empty());
    }

    #[test]
    fn test_persists_across_loads() {
        let store = MemoryStore::new();
        {
            let mut cart = CartService::load(&store).expect("load");
            cart.add_item(&product(1, "Arroz", 1300), 2).expect("add");
        }
        let cart = CartService::load(&store).expect("reload");
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn test_migrates_from_legacy_key() {
        let store = MemoryStore::new();
        let legacy = vec![CartLine {
            id: ProductId::new(2),
            name: "Leche Descremada".to_owned(),
            price: Money::from_pesos(1000),
            image: "img/leche.jpg".to_owned(),
            quantity: 3,
            source_store: Some("Villa Norte".to_owned()),
        }];
        store.put(keys::CART_LEGACY, &legacy).expect("seed legacy");

        let mut cart = CartService::load(&store).expect("load");
        assert_eq!(cart.total_item_count(), 3);

        // First save moves the cart to the canonical key and drops the
        // legacy one.
        cart.add_item(&product(1, "Arroz", 1300), 1).expect("add");
        assert!(store.get_raw(keys::CART).expect("get").is_some());
        assert!(store.get_raw(keys::CART_LEGACY).expect("get").is_none());
    }

    #[test]
    fn test_canonical_key_wins_over_legacy() {
        let store = MemoryStore::new();
        store.put_raw(keys::CART_LEGACY, "[]").expect("seed legacy");
        let canonical = vec![CartLine {
            id: ProductId::new(1),
            name: "Arroz".to_owned(),
            price: Money::from_pesos(1300),
            image: String::new(),
            quantity: 1,
            source_store: None,
        }];
        store.put(keys::CART, &canonical).expect("seed canonical");

        let cart = CartService::load(&store).expect("load");
        assert_eq!(cart.total_item_count(), 1);
    }
}
