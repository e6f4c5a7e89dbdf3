//! Flight-time, atmosphere and speed formulas.

use crate::aircraft::AircraftTable;
use crate::error::{AviationError, Result};
use crate::spatial::haversine_distance_km;

/// Standard gravity, m/s²
pub const GRAVITY: f64 = 9.81;

// ISA troposphere constants
const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;
const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;
const LAPSE_RATE_K_PER_M: f64 = 0.0065;
const GAS_CONSTANT: f64 = 8.31447; // J/(mol·K)
const AIR_MOLAR_MASS: f64 = 0.0289644; // kg/mol

/// Speed of sound is approximated as SOUND_SPEED_COEFF * sqrt(T) m/s.
const SOUND_SPEED_COEFF: f64 = 20.05;

/// Basic flight planning formulas.
#[derive(Debug, Clone, Default)]
pub struct FlightCalculator {
    aircraft: AircraftTable,
}

impl FlightCalculator {
    pub fn new(aircraft: AircraftTable) -> Self {
        Self { aircraft }
    }

    /// Flight time in hours.
    ///
    /// `wind_factor` scales ground speed (nominally 0.8..=1.2). Fails if
    /// `speed` or the wind-adjusted speed is not positive.
    pub fn flight_time(&self, distance: f64, speed: f64, wind_factor: f64) -> Result<f64> {
        if speed <= 0.0 || speed.is_nan() {
            return Err(AviationError::InvalidSpeed(speed));
        }
        let effective_speed = speed * wind_factor;
        if effective_speed <= 0.0 || effective_speed.is_nan() {
            return Err(AviationError::InvalidSpeed(effective_speed));
        }
        Ok(distance / effective_speed)
    }

    /// Great-circle distance in kilometers.
    pub fn distance(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        haversine_distance_km(lat1, lon1, lat2, lon2)
    }

    /// Static pressure in hPa at `altitude` meters (troposphere model).
    pub fn altitude_pressure(&self, altitude: f64) -> f64 {
        let exponent = (AIR_MOLAR_MASS * GRAVITY) / (GAS_CONSTANT * LAPSE_RATE_K_PER_M);
        SEA_LEVEL_PRESSURE_HPA
            * (1.0 - (LAPSE_RATE_K_PER_M * altitude) / SEA_LEVEL_TEMPERATURE_K).powf(exponent)
    }

    /// Mach number for a true airspeed in km/h at `altitude` meters.
    pub fn mach_number(&self, speed: f64, altitude: f64) -> f64 {
        let temperature = SEA_LEVEL_TEMPERATURE_K - LAPSE_RATE_K_PER_M * altitude;
        let speed_of_sound = SOUND_SPEED_COEFF * temperature.sqrt();
        (speed / 3.6) / speed_of_sound
    }

    /// Trip fuel in liters from the nominal burn rate of `aircraft_type`.
    ///
    /// Unknown types use the default profile.
    pub fn fuel_consumption(&self, distance: f64, aircraft_type: &str) -> f64 {
        distance / 100.0 * self.aircraft.profile(aircraft_type).fuel_rate
    }
}
