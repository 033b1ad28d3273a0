//! Read-only order lookup.
//!
//! Orders are written by the external order-placement flow; this module
//! only validates an order number's shape and scans the stored list for an
//! exact match. The list is demo scale, so a linear scan is fine.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::OrderLookupError;
use crate::models::Order;
use crate::storage::{KeyValueStore, keys};

/// Accepted order-number shape: letter prefix, dash, digits, dash, digits
/// (e.g. `VM-123456-789`).
static ORDER_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[A-Z]+-\d+-\d+$").unwrap()
});

/// Legacy order numbers carry a bare `P-` prefix instead.
const LEGACY_PREFIX: &str = "P-";

/// Whether `id` has an accepted order-number shape.
#[must_use]
pub fn is_valid_order_id(id: &str) -> bool {
    ORDER_ID_RE.is_match(id) || id.starts_with(LEGACY_PREFIX)
}

/// Read-only directory over the stored order list.
pub struct OrderDirectory<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> OrderDirectory<S> {
    /// Wrap the backing store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All stored orders; an absent order list is empty.
    ///
    /// # Errors
    ///
    /// Returns `OrderLookupError::Storage` on read failure or a corrupt
    /// stored list.
    pub fn list(&self) -> Result<Vec<Order>, OrderLookupError> {
        Ok(self.store.get::<Vec<Order>>(keys::ORDERS)?.unwrap_or_default())
    }

    /// Look up an order by its number.
    ///
    /// Shape validation happens before any store access: a malformed id
    /// fails fast with `InvalidFormat`.
    ///
    /// # Errors
    ///
    /// - `OrderLookupError::InvalidFormat` for a blank or malformed id
    /// - `OrderLookupError::NotFound` for a well-formed id with no match
    /// - `OrderLookupError::Storage` on read failure
    pub fn lookup(&self, id: &str) -> Result<Order, OrderLookupError> {
        let id = id.trim();
        if id.is_empty() || !is_valid_order_id(id) {
            return Err(OrderLookupError::InvalidFormat(id.to_owned()));
        }

        debug!(id, "Looking up order");
        self.list()?
            .into_iter()
            .find(|order| order.id.as_str() == id)
            .ok_or_else(|| OrderLookupError::NotFound(id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use villa_markets_core::{OrderId, OrderStatus};

    use crate::storage::{MemoryStore, StorageError};

    fn seed_orders(store: &MemoryStore) {
        let orders = serde_json::json!([
            {
                "id": "VM-123456-789",
                "fecha": "2025-09-01",
                "hora": "15:30",
                "estado": "Entregado",
                "totales": { "total": 5480 },
                "tipoEntrega": "recoger",
                "minimarket": "M001",
                "items": [
                    { "nombre": "Leche Entera 1L", "cantidad": 2, "precio": 1200 }
                ]
            },
            {
                "id": "P-100",
                "fecha": "2024-12-24",
                "estado": "Pendiente",
                "total": "$9.990"
            }
        ]);
        store
            .put_raw(keys::ORDERS, &orders.to_string())
            .expect("seed");
    }

    #[test]
    fn test_lookup_finds_exact_match() {
        let store = MemoryStore::new();
        seed_orders(&store);
        let directory = OrderDirectory::new(&store);

        let order = directory.lookup("VM-123456-789").expect("found");
        assert_eq!(order.id, OrderId::new("VM-123456-789"));
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_malformed_id_fails_before_store_access() {
        // A store whose reads always fail: if validation short-circuits
        // first, the error must be InvalidFormat, never Storage.
        struct FailingStore;
        impl KeyValueStore for FailingStore {
            fn get_raw(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Err(StorageError::Io(std::io::Error::other("must not be read")))
            }
            fn put_raw(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::Io(std::io::Error::other("must not be written")))
            }
            fn remove(&self, _key: &str) -> Result<(), StorageError> {
                Err(StorageError::Io(std::io::Error::other("must not be written")))
            }
        }

        let directory = OrderDirectory::new(FailingStore);
        let err = directory.lookup("abc").expect_err("invalid");
        assert!(matches!(err, OrderLookupError::InvalidFormat(ref id) if id == "abc"));
    }

    #[test]
    fn test_well_formed_but_absent_id_is_not_found() {
        let store = MemoryStore::new();
        seed_orders(&store);
        let directory = OrderDirectory::new(&store);

        let err = directory.lookup("VM-999999-999").expect_err("absent");
        assert!(matches!(err, OrderLookupError::NotFound(ref id) if id == "VM-999999-999"));
    }

    #[test]
    fn test_legacy_prefix_is_accepted() {
        let store = MemoryStore::new();
        seed_orders(&store);
        let directory = OrderDirectory::new(&store);

        let order = directory.lookup("P-100").expect("found");
        assert_eq!(order.total_display(), "$9.990");
    }

    #[test]
    fn test_blank_id_is_invalid() {
        let store = MemoryStore::new();
        let directory = OrderDirectory::new(&store);
        assert!(matches!(
            directory.lookup("   "),
            Err(OrderLookupError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_id_shape_acceptance() {
        assert!(is_valid_order_id("VM-123456-789"));
        assert!(is_valid_order_id("AB-1-2"));
        assert!(is_valid_order_id("P-anything"));
        assert!(!is_valid_order_id("vm-123456-789"));
        assert!(!is_valid_order_id("VM-123456"));
        assert!(!is_valid_order_id("123-456-789"));
        assert!(!is_valid_order_id("abc"));
    }

    #[test]
    fn test_empty_store_lookup_is_not_found() {
        let store = MemoryStore::new();
        let directory = OrderDirectory::new(&store);
        assert!(matches!(
            directory.lookup("VM-1-1"),
            Err(OrderLookupError::NotFound(_))
        ));
    }
}
