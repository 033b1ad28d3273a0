//! CLI command implementations.

pub mod cart;
pub mod orders;
pub mod products;
pub mod seed;
pub mod stores;

use villa_markets_storefront::catalog::CatalogRepository;
use villa_markets_storefront::config::StorefrontConfig;
use villa_markets_storefront::fixtures;
use villa_markets_storefront::storage::LocalStore;

/// Open the on-disk store at the configured data directory.
pub(crate) fn open_store() -> Result<LocalStore, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    Ok(LocalStore::open(config.data_dir)?)
}

/// Open the catalog, seeding demo data on first use when configured to.
pub(crate) fn open_catalog() -> Result<CatalogRepository<LocalStore>, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = LocalStore::open(config.data_dir)?;
    let repository = if config.seed_on_empty {
        CatalogRepository::open(store, fixtures::demo_products())?
    } else {
        CatalogRepository::open_unseeded(store)?
    };
    Ok(repository)
}
