//! Physical store locations.

use serde::{Deserialize, Serialize};

use villa_markets_core::LocationId;

use crate::geo::Coordinates;

/// Whether a location is currently operating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LocationStatus {
    #[default]
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    Inactive,
}

/// One physical minimarket of the chain.
///
/// Static reference data; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreLocation {
    pub id: LocationId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "comuna")]
    pub municipality: String,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
    #[serde(rename = "horario")]
    pub opening_hours: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "estado")]
    pub status: LocationStatus,
}

impl StoreLocation {
    /// The location's position in decimal degrees.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_original_record() {
        let raw = r#"{
            "id": "M001",
            "nombre": "Villa Central",
            "direccion": "Av. Central 123",
            "comuna": "Santiago",
            "latitud": -33.447487,
            "longitud": -70.673676,
            "horario": "Lun-Vie: 8:00-21:00, Sáb-Dom: 9:00-20:00",
            "telefono": "+56912345678",
            "estado": "Activo"
        }"#;
        let location: StoreLocation = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(location.id, LocationId::new("M001"));
        assert_eq!(location.status, LocationStatus::Active);
        let coords = location.coordinates();
        assert!((coords.latitude - -33.447_487).abs() < f64::EPSILON);
    }
}
