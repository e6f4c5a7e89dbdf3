//! Airport records and route descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered airport.
///
/// Serializes as a flat record, which is also the airport file format:
/// `icao_code, name, city, country, latitude, longitude, elevation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub icao_code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    /// Decimal degrees, north positive
    pub latitude: f64,
    /// Decimal degrees, east positive
    pub longitude: f64,
    /// Meters above sea level
    #[serde(default)]
    pub elevation: f64,
}

impl Airport {
    /// Create an airport at sea level.
    pub fn new(
        icao_code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            icao_code: icao_code.into(),
            name: name.into(),
            city: city.into(),
            country: country.into(),
            latitude,
            longitude,
            elevation: 0.0,
        }
    }

    /// Set the field elevation in meters.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Registry key for this airport.
    pub fn key(&self) -> String {
        self.icao_code.to_uppercase()
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}, {})",
            self.icao_code, self.name, self.city, self.country
        )
    }
}

/// Snapshot of a route between two registered airports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub departure: Airport,
    pub arrival: Airport,
    pub distance_km: f64,
    /// Directional label, e.g. `UUEE → EGLL`
    pub route: String,
}

impl RouteInfo {
    pub(crate) fn new(departure: &Airport, arrival: &Airport, distance_km: f64) -> Self {
        Self {
            route: format!("{} → {}", departure.icao_code, arrival.icao_code),
            departure: departure.clone(),
            arrival: arrival.clone(),
            distance_km,
        }
    }
}
