//! Villa Markets storefront data layer.
//!
//! Everything the Villa Markets storefront persists lives in a flat
//! key-value store of serialized JSON values (the browser-local-storage
//! model of the original site). This crate is the one shared, stateful
//! abstraction on top of that store:
//!
//! - [`storage`] - the key-value store trait plus file-backed and
//!   in-memory implementations
//! - [`catalog`] - product repository (CRUD + filtering, seeded on first
//!   run)
//! - [`cart`] - shopping cart service with snapshot line items
//! - [`orders`] - read-only order lookup with id-shape validation
//! - [`locations`] - static store-location directory
//! - [`geo`] - haversine distance and nearest-store selection
//! - [`session`] - current-user record access
//! - [`fixtures`] - demonstration seed data
//!
//! Every mutation re-serializes the owning collection wholesale; the last
//! writer wins across concurrent openers. There is no locking and no
//! transaction beyond the atomicity of a single value write.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod geo;
pub mod locations;
pub mod models;
pub mod orders;
pub mod session;
pub mod storage;

pub use error::{CartError, CatalogError, OrderLookupError};
