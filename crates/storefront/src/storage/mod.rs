//! Key-value storage for storefront state.
//!
//! All shared state is serialized JSON under well-known string keys,
//! mirroring the browser local storage the original site used:
//!
//! ## Keys
//!
//! - `villaMarketsProductos` - product catalog (written by the catalog
//!   repository)
//! - `carritoVillaMarkets` - shopping cart, canonical key (written by the
//!   cart service)
//! - `carrito` - legacy cart key; read once as a migration fallback and
//!   removed on the next save
//! - `pedidosVillaMarkets` - placed orders (written by the external
//!   order-placement flow; read-only here)
//! - `usuarioActual` - current user record (written by the external auth
//!   flow; read and cleared here)
//! - `minimarketSeleccionado` - selected store-location id
//!
//! There is no schema enforcement and no transaction: a value write is as
//! atomic as the backing primitive makes it, and nothing more.

pub mod local;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use local::LocalStore;
pub use memory::MemoryStore;

/// Well-known storage keys.
pub mod keys {
    /// Product catalog.
    pub const PRODUCTS: &str = "villaMarketsProductos";
    /// Shopping cart (canonical key).
    pub const CART: &str = "carritoVillaMarkets";
    /// Shopping cart (legacy key, migration fallback only).
    pub const CART_LEGACY: &str = "carrito";
    /// Placed orders.
    pub const ORDERS: &str = "pedidosVillaMarkets";
    /// Current user record.
    pub const CURRENT_USER: &str = "usuarioActual";
    /// Selected store-location id.
    pub const SELECTED_STORE: &str = "minimarketSeleccionado";
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value is not valid JSON for the expected shape.
    #[error("corrupt value under key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for storage.
    #[error("failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A flat string key-value store.
///
/// The local-storage abstraction: values are opaque strings, keys are flat,
/// and a missing key is an ordinary `None`, never an error.
pub trait KeyValueStore {
    /// Get the raw string value under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing store cannot be read.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set the raw string value under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing store cannot be written.
    fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Get and deserialize the JSON value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` if the stored value does not
    /// deserialize to `T`, or `StorageError::Io` on read failure.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Corrupt {
                    key: key.to_owned(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Serialize `value` to JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialize` if `value` cannot be serialized,
    /// or `StorageError::Io` on write failure.
    fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_owned(),
            source,
        })?;
        self.put_raw(key, &raw)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_raw(key)
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put_raw(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
