//! Seed the catalog with demonstration data.

use tracing::info;

use villa_markets_storefront::catalog::CatalogRepository;
use villa_markets_storefront::config::StorefrontConfig;
use villa_markets_storefront::fixtures;
use villa_markets_storefront::storage::{KeyValueStore, LocalStore, keys};

/// Write the demo catalog to the configured data directory.
///
/// An existing catalog is left untouched unless `force` is given, in which
/// case it is replaced.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or written.
pub fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = LocalStore::open(&config.data_dir)?;

    if force {
        store.remove(keys::PRODUCTS)?;
    }

    let repository = CatalogRepository::open(store, fixtures::demo_products())?;
    info!(
        count = repository.list().len(),
        data_dir = %config.data_dir.display(),
        "Catalog seeded"
    );
    Ok(())
}
