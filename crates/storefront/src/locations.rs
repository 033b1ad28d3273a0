//! Store-location directory.
//!
//! The chain's locations are static reference data; the directory only
//! reads them and remembers which one the user selected.

use tracing::debug;

use villa_markets_core::LocationId;

use crate::geo::{Coordinates, NearestLocation, nearest_location};
use crate::models::StoreLocation;
use crate::storage::{KeyValueStore, StorageError, keys};

/// Directory over a fixed list of store locations.
pub struct LocationDirectory {
    locations: Vec<StoreLocation>,
}

impl LocationDirectory {
    /// Build a directory over `locations`.
    #[must_use]
    pub const fn new(locations: Vec<StoreLocation>) -> Self {
        Self { locations }
    }

    /// All locations.
    #[must_use]
    pub fn list(&self) -> &[StoreLocation] {
        &self.locations
    }

    /// Find a location by id.
    #[must_use]
    pub fn find(&self, id: &LocationId) -> Option<&StoreLocation> {
        self.locations.iter().find(|l| &l.id == id)
    }

    /// Display name for a store reference: resolves an id like `M001` to
    /// its location name, passing anything unresolvable through as-is.
    #[must_use]
    pub fn display_name<'a>(&'a self, reference: &'a str) -> &'a str {
        self.find(&LocationId::new(reference))
            .map_or(reference, |l| l.name.as_str())
    }

    /// The location closest to `origin`, or `None` if the directory is
    /// empty.
    #[must_use]
    pub fn nearest(&self, origin: Coordinates) -> Option<NearestLocation<'_>> {
        nearest_location(origin, &self.locations)
    }

    /// Persist `id` as the selected store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn select<S: KeyValueStore>(&self, store: &S, id: &LocationId) -> Result<(), StorageError> {
        debug!(id = %id, "Selecting store location");
        store.put_raw(keys::SELECTED_STORE, id.as_str())
    }

    /// The currently selected location, if one was persisted and still
    /// exists in the directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub fn selected<S: KeyValueStore>(
        &self,
        store: &S,
    ) -> Result<Option<&StoreLocation>, StorageError> {
        let id = store.get_raw(keys::SELECTED_STORE)?;
        Ok(id.and_then(|id| self.find(&LocationId::new(id))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fixtures;
    use crate::storage::MemoryStore;

    #[test]
    fn test_find_by_id() {
        let directory = LocationDirectory::new(fixtures::store_locations());
        let central = directory.find(&LocationId::new("M001")).expect("M001");
        assert_eq!(central.name, "Villa Central");
        assert!(directory.find(&LocationId::new("M999")).is_none());
    }

    #[test]
    fn test_display_name_resolves_ids_and_passes_through_names() {
        let directory = LocationDirectory::new(fixtures::store_locations());
        assert_eq!(directory.display_name("M002"), "Villa Norte");
        assert_eq!(directory.display_name("Somewhere Else"), "Somewhere Else");
    }

    #[test]
    fn test_nearest_from_downtown_santiago() {
        let directory = LocationDirectory::new(fixtures::store_locations());
        // A point right next to Villa Central.
        let origin = Coordinates::new(-33.448, -70.673);
        let nearest = directory.nearest(origin).expect("nearest");
        assert_eq!(nearest.location.id, LocationId::new("M001"));
        assert!(nearest.distance_km < 1.0);
    }

    #[test]
    fn test_select_and_read_back() {
        let directory = LocationDirectory::new(fixtures::store_locations());
        let store = MemoryStore::new();

        assert!(directory.selected(&store).expect("selected").is_none());
        directory
            .select(&store, &LocationId::new("M003"))
            .expect("select");
        let selected = directory.selected(&store).expect("selected").expect("some");
        assert_eq!(selected.name, "Villa Sur");
    }

    #[test]
    fn test_selected_unknown_id_yields_none() {
        let directory = LocationDirectory::new(fixtures::store_locations());
        let store = MemoryStore::new();
        store.put_raw(keys::SELECTED_STORE, "M999").expect("put");
        assert!(directory.selected(&store).expect("selected").is_none());
    }
}
