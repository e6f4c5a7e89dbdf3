//! Reference tables used by the calculators.
//!
//! The built-in values are the `Default` impls. A JSON file can override
//! either section; a missing section keeps its defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::aircraft::AircraftTable;
use crate::error::Result;
use crate::flight::FlightCalculator;
use crate::fuel::FuelCalculator;
use crate::weather::{WeatherAnalyzer, WeatherThresholds};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AviationConfig {
    pub aircraft: AircraftTable,
    pub weather: WeatherThresholds,
}

impl AviationConfig {
    /// Parse a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::info!(
            path = %path.display(),
            aircraft_types = config.aircraft.types().count(),
            "Loaded aviation config"
        );
        Ok(config)
    }

    pub fn flight_calculator(&self) -> FlightCalculator {
        FlightCalculator::new(self.aircraft.clone())
    }

    pub fn fuel_calculator(&self) -> FuelCalculator {
        FuelCalculator::new(self.aircraft.clone())
    }

    pub fn weather_analyzer(&self) -> WeatherAnalyzer {
        WeatherAnalyzer::new(self.weather.clone())
    }
}
