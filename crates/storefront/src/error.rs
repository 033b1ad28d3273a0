//! Error types for the storefront data layer.
//!
//! Nothing here is fatal: every failure is local to one operation and the
//! caller can retry. Callers map these to user-facing messages.

use thiserror::Error;

use villa_markets_core::ProductId;

use crate::storage::StorageError;

/// Errors from catalog repository operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the given id exists.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The backing store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors from cart service operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product id could not be resolved against the catalog; the cart
    /// was not mutated.
    #[error("product {0} not found; cart unchanged")]
    ProductNotFound(ProductId),

    /// The backing store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors from order lookup.
#[derive(Debug, Error)]
pub enum OrderLookupError {
    /// The supplied id does not have an accepted order-number shape.
    /// Raised before any store access.
    #[error("invalid order number format: {0} (expected e.g. VM-123456-789)")]
    InvalidFormat(String),

    /// The id is well-formed but no stored order matches it.
    #[error("order {0} not found")]
    NotFound(String),

    /// The backing store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
