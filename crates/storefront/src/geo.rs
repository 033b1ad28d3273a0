//! Great-circle distance and nearest-store selection.
//!
//! Pure functions, no state. Distances use the haversine formula on a
//! spherical Earth of radius 6371 km, which is plenty for ranking a
//! handful of stores inside one city.

use crate::models::StoreLocation;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The store closest to a query point, with its distance.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestLocation<'a> {
    pub location: &'a StoreLocation,
    pub distance_km: f64,
}

/// Haversine distance between two points in kilometers.
#[must_use]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Find the location nearest to `origin`.
///
/// Ties break toward the first minimum in list order (strict `<`
/// comparison). Returns `None` for an empty list.
#[must_use]
pub fn nearest_location<'a>(
    origin: Coordinates,
    locations: &'a [StoreLocation],
) -> Option<NearestLocation<'a>> {
    let mut nearest: Option<NearestLocation<'a>> = None;
    for location in locations {
        let distance_km = haversine_km(origin, location.coordinates());
        let closer = nearest
            .as_ref()
            .is_none_or(|best| distance_km < best.distance_km);
        if closer {
            nearest = Some(NearestLocation {
                location,
                distance_km,
            });
        }
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use villa_markets_core::LocationId;

    use crate::models::LocationStatus;

    fn location(id: &str, latitude: f64, longitude: f64) -> StoreLocation {
        StoreLocation {
            id: LocationId::new(id),
            name: id.to_owned(),
            address: String::new(),
            municipality: String::new(),
            latitude,
            longitude,
            opening_hours: String::new(),
            phone: String::new(),
            status: LocationStatus::Active,
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let santiago = Coordinates::new(-33.447_487, -70.673_676);
        let la_reina = Coordinates::new(-33.435_827, -70.569_067);
        let ab = haversine_km(santiago, la_reina);
        let ba = haversine_km(la_reina, santiago);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Coordinates::new(-33.529_259, -70.599_28);
        assert!(haversine_km(p, p).abs() < 1e-12);
    }

    #[test]
    fn test_known_distance_santiago_to_la_reina() {
        // ~9.8 km between the Villa Central and Villa Norte coordinates.
        let d = haversine_km(
            Coordinates::new(-33.447_487, -70.673_676),
            Coordinates::new(-33.435_827, -70.569_067),
        );
        assert!(d > 9.0 && d < 11.0, "unexpected distance {d}");
    }

    #[test]
    fn test_nearest_picks_minimum() {
        // Offsets in latitude only: 0.1 deg is roughly 11 km, so these sit
        // at roughly 10, 3, and 7 km from the origin.
        let origin = Coordinates::new(0.0, 0.0);
        let stores = vec![
            location("far", 0.09, 0.0),
            location("near", 0.027, 0.0),
            location("mid", 0.063, 0.0),
        ];
        let nearest = nearest_location(origin, &stores).expect("nearest");
        assert_eq!(nearest.location.id, LocationId::new("near"));
        assert!(nearest.distance_km < 3.5);
    }

    #[test]
    fn test_nearest_tie_breaks_to_first_in_list_order() {
        let origin = Coordinates::new(0.0, 0.0);
        let stores = vec![
            location("first", 0.05, 0.0),
            location("second", 0.05, 0.0),
        ];
        let nearest = nearest_location(origin, &stores).expect("nearest");
        assert_eq!(nearest.location.id, LocationId::new("first"));
    }

    #[test]
    fn test_no_stores_yields_none() {
        let origin = Coordinates::new(0.0, 0.0);
        assert!(nearest_location(origin, &[]).is_none());
    }
}
