//! In-memory airport registry keyed by ICAO code.
//!
//! Lookups are case-insensitive and never fail: an unknown code simply
//! yields `None`. Airports keep their registration order so that search
//! results and exported files are deterministic.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::airport::{Airport, RouteInfo};
use crate::error::Result;
use crate::spatial::haversine_distance_km;

/// Registry of airports for ICAO code lookup and route queries.
#[derive(Debug, Clone)]
pub struct AirportRegistry {
    airports: Vec<Airport>,
    /// Uppercased ICAO code -> position in `airports`
    index: HashMap<String, usize>,
}

impl Default for AirportRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AirportRegistry {
    /// Create a registry pre-loaded with the built-in airport set.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for airport in default_airports() {
            registry.add(airport);
        }
        registry
    }

    /// Create a registry with no airports.
    pub fn empty() -> Self {
        Self {
            airports: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register an airport, replacing any airport with the same code.
    ///
    /// A replaced airport keeps its original position in iteration order.
    pub fn add(&mut self, airport: Airport) {
        let key = airport.key();
        match self.index.get(&key) {
            Some(&slot) => {
                tracing::debug!(icao = %key, "Replacing registered airport");
                self.airports[slot] = airport;
            }
            None => {
                self.index.insert(key, self.airports.len());
                self.airports.push(airport);
            }
        }
    }

    /// Get an airport by ICAO code, case-insensitive.
    pub fn get(&self, icao_code: &str) -> Option<&Airport> {
        self.index
            .get(&icao_code.to_uppercase())
            .map(|&slot| &self.airports[slot])
    }

    /// Find airports whose name, city, country or code contains `query`,
    /// ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Airport> {
        let query = query.to_lowercase();
        self.airports
            .iter()
            .filter(|airport| {
                airport.name.to_lowercase().contains(&query)
                    || airport.city.to_lowercase().contains(&query)
                    || airport.country.to_lowercase().contains(&query)
                    || airport.icao_code.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// All airports in `country`, compared case-insensitively.
    pub fn filter_by_country(&self, country: &str) -> Vec<&Airport> {
        let country = country.to_lowercase();
        self.airports
            .iter()
            .filter(|airport| airport.country.to_lowercase() == country)
            .collect()
    }

    /// Great-circle distance in kilometers between two registered airports.
    ///
    /// Returns `None` if either code is not registered.
    pub fn distance_between(&self, icao1: &str, icao2: &str) -> Option<f64> {
        let a = self.get(icao1)?;
        let b = self.get(icao2)?;
        Some(haversine_distance_km(
            a.latitude,
            a.longitude,
            b.latitude,
            b.longitude,
        ))
    }

    /// Build a route descriptor between two registered airports.
    ///
    /// Returns `None` if either endpoint is not registered.
    pub fn route_info(&self, departure: &str, arrival: &str) -> Option<RouteInfo> {
        let dep = self.get(departure)?;
        let arr = self.get(arrival)?;
        let distance =
            haversine_distance_km(dep.latitude, dep.longitude, arr.latitude, arr.longitude);
        Some(RouteInfo::new(dep, arr, distance))
    }

    /// Number of registered airports.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Returns true if no airports are registered.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Iterate over airports in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    /// Write every airport as a pretty-printed JSON array.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.airports)?;
        Ok(())
    }

    /// Read a JSON array of airport records and register each of them.
    ///
    /// The whole input is parsed before any airport is added, so a
    /// malformed document leaves the registry untouched. Returns the number
    /// of records applied.
    pub fn read_json<R: Read>(&mut self, reader: R) -> Result<usize> {
        let airports: Vec<Airport> = serde_json::from_reader(reader)?;
        let count = airports.len();
        for airport in airports {
            self.add(airport);
        }
        Ok(count)
    }

    /// Export all airports to a JSON file.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), count = self.len(), "Exported airports");
        Ok(())
    }

    /// Import airports from a JSON file written by [`AirportRegistry::export`].
    pub fn import<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let count = self.read_json(reader)?;
        tracing::info!(path = %path.display(), count, "Imported airports");
        Ok(count)
    }
}

/// Built-in airport set loaded by [`AirportRegistry::new`].
pub fn default_airports() -> Vec<Airport> {
    vec![
        Airport::new("UUEE", "Шереметьево", "Москва", "Россия", 55.9736, 37.4145)
            .with_elevation(190.0),
        Airport::new("UUDD", "Домодедово", "Москва", "Россия", 55.4146, 37.8994)
            .with_elevation(179.0),
        Airport::new("UUMO", "Внуково", "Москва", "Россия", 55.5915, 37.2615).with_elevation(209.0),
        Airport::new("EGLL", "Хитроу", "Лондон", "Великобритания", 51.4700, -0.4543)
            .with_elevation(25.0),
        Airport::new("LFPG", "Шарль де Голль", "Париж", "Франция", 49.0097, 2.5479)
            .with_elevation(119.0),
        Airport::new("EDDF", "Франкфурт", "Франкфурт", "Германия", 50.0379, 8.5622)
            .with_elevation(113.0),
        Airport::new("KJFK", "Кеннеди", "Нью-Йорк", "США", 40.6413, -73.7781).with_elevation(4.0),
        Airport::new("KLAX", "Лос-Анджелес", "Лос-Анджелес", "США", 33.9416, -118.4085)
            .with_elevation(38.0),
        Airport::new("RJTT", "Ханеда", "Токио", "Япония", 35.5494, 139.7798).with_elevation(6.0),
        Airport::new("ZBAA", "Пекин Столичный", "Пекин", "Китай", 40.0801, 116.5846)
            .with_elevation(35.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(airports: &[&Airport]) -> Vec<String> {
        airports.iter().map(|a| a.icao_code.clone()).collect()
    }

    #[test]
    fn test_default_registry_has_ten_airports() {
        let registry = AirportRegistry::new();
        assert_eq!(registry.len(), 10);
        assert!(AirportRegistry::empty().is_empty());
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let registry = AirportRegistry::new();
        let airport = registry.get("uuee").expect("UUEE is a default airport");
        assert_eq!(airport.name, "Шереметьево");
        assert!(registry.get("XXXX").is_none());
    }

    #[test]
    fn test_search_moscow_returns_three_airports() {
        let registry = AirportRegistry::new();
        let found = registry.search("Москва");
        assert_eq!(codes(&found), vec!["UUEE", "UUDD", "UUMO"]);
    }

    #[test]
    fn search_matches_code_substring_and_ignores_case() {
        let registry = AirportRegistry::new();
        assert_eq!(codes(&registry.search("kj")), vec!["KJFK"]);
        assert_eq!(codes(&registry.search("москва")).len(), 3);
        assert!(registry.search("Atlantis").is_empty());
    }

    #[test]
    fn test_filter_by_country() {
        let registry = AirportRegistry::new();
        assert_eq!(codes(&registry.filter_by_country("сша")), vec!["KJFK", "KLAX"]);
        // Exact match only, not substring
        assert!(registry.filter_by_country("США ").is_empty());
    }

    #[test]
    fn add_overwrites_in_place() {
        let mut registry = AirportRegistry::new();
        registry.add(Airport::new("uudd", "Domodedovo", "Moscow", "Russia", 55.41, 37.90));
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.get("UUDD").map(|a| a.name.as_str()), Some("Domodedovo"));
        let order: Vec<_> = registry.iter().map(|a| a.key()).collect();
        assert_eq!(order[1], "UUDD");
    }

    #[test]
    fn test_distance_between_unknown_airport_is_none() {
        let registry = AirportRegistry::new();
        assert!(registry.distance_between("UUEE", "ZZZZ").is_none());
        assert!(registry.distance_between("ZZZZ", "UUEE").is_none());
        let d = registry.distance_between("UUEE", "EGLL").unwrap();
        assert!(d > 2400.0 && d < 2600.0, "got {d}");
    }

    #[test]
    fn test_route_info() {
        let registry = AirportRegistry::new();
        let route = registry.route_info("uuee", "egll").unwrap();
        assert_eq!(route.route, "UUEE → EGLL");
        assert_eq!(route.departure.city, "Москва");
        assert_eq!(route.arrival.city, "Лондон");
        assert_eq!(Some(route.distance_km), registry.distance_between("UUEE", "EGLL"));
        assert!(registry.route_info("UUEE", "NOPE").is_none());
    }

    #[test]
    fn read_json_rejects_malformed_input_without_changes() {
        let mut registry = AirportRegistry::empty();
        let result = registry.read_json(r#"[{"icao_code": "EHAM"}]"#.as_bytes());
        assert!(result.is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn writer_keeps_non_ascii_names() {
        let registry = AirportRegistry::new();
        let mut buf = Vec::new();
        registry.write_json(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Шереметьево"));
    }
}
