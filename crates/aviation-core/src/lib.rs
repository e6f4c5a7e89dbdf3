//! Aviation arithmetic: airport registry and routes, fuel burn and
//! efficiency ranking, standard-atmosphere formulas and weather grading.

pub mod aircraft;
pub mod airport;
pub mod config;
pub mod error;
pub mod flight;
pub mod fuel;
pub mod registry;
pub mod spatial;
pub mod weather;

pub use aircraft::{AircraftProfile, AircraftTable, DEFAULT_PROFILE_KEY};
pub use airport::{Airport, RouteInfo};
pub use config::AviationConfig;
pub use error::{AviationError, Result};
pub use flight::FlightCalculator;
pub use fuel::{EfficiencyEntry, FuelCalculator, FuelConsumption};
pub use registry::{default_airports, AirportRegistry};
pub use spatial::{haversine_distance_km, EARTH_RADIUS_KM};
pub use weather::{
    Advisory, VisibilityThresholds, WeatherAnalyzer, WeatherCondition, WeatherReport,
    WeatherThresholds, WindThresholds,
};
