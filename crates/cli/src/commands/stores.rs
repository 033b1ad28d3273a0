//! Store location commands.

use tracing::info;

use villa_markets_core::LocationId;
use villa_markets_storefront::fixtures;
use villa_markets_storefront::geo::Coordinates;
use villa_markets_storefront::locations::LocationDirectory;

/// List every store location.
pub fn list() {
    let directory = LocationDirectory::new(fixtures::store_locations());
    for location in directory.list() {
        info!(
            id = %location.id,
            name = %location.name,
            address = %location.address,
            municipality = %location.municipality,
            hours = %location.opening_hours,
            phone = %location.phone,
            "Store"
        );
    }
}

/// Find the store nearest to the given coordinate.
///
/// # Errors
///
/// Returns an error if no store locations are available.
pub fn nearest(lat: f64, lng: f64) -> Result<(), Box<dyn std::error::Error>> {
    let directory = LocationDirectory::new(fixtures::store_locations());
    let origin = Coordinates::new(lat, lng);
    let found = directory
        .nearest(origin)
        .ok_or("no store locations available")?;
    info!(
        id = %found.location.id,
        name = %found.location.name,
        address = %found.location.address,
        distance_km = found.distance_km,
        "Nearest store"
    );
    Ok(())
}

/// Persist a store location as the preferred one.
///
/// # Errors
///
/// Returns an error if the id is unknown or the selection cannot be
/// persisted.
pub fn select(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let directory = LocationDirectory::new(fixtures::store_locations());
    let location_id = LocationId::new(id);
    let location = directory
        .find(&location_id)
        .ok_or_else(|| format!("unknown store location: {id}"))?;

    let store = super::open_store()?;
    directory.select(&store, &location_id)?;
    info!(id = %location.id, name = %location.name, "Store selected");
    Ok(())
}
