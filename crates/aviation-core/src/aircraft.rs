//! Aircraft performance profiles.
//!
//! Profiles are looked up by a lowercase type key such as `boeing_737`.
//! Every table carries a `default` profile which answers for any key it
//! does not know, so lookups never fail.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{AviationError, Result};

/// Key of the fallback profile.
pub const DEFAULT_PROFILE_KEY: &str = "default";

/// Nominal performance constants for one aircraft type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    /// Liters per 100 km
    pub fuel_rate: f64,
    /// km/h
    pub cruise_speed: f64,
    /// km
    pub max_range: f64,
    /// Liters
    pub fuel_capacity: f64,
}

impl AircraftProfile {
    pub const fn new(
        fuel_rate: f64,
        cruise_speed: f64,
        max_range: f64,
        fuel_capacity: f64,
    ) -> Self {
        Self {
            fuel_rate,
            cruise_speed,
            max_range,
            fuel_capacity,
        }
    }

    /// Hours to cover `distance` km at cruise speed.
    ///
    /// A profile without a usable cruise speed yields 0 hours.
    pub fn cruise_time(&self, distance: f64) -> f64 {
        if !self.cruise_speed.is_finite() || self.cruise_speed <= 0.0 {
            tracing::warn!(
                cruise_speed = self.cruise_speed,
                "Profile has no usable cruise speed, flight time set to 0"
            );
            return 0.0;
        }
        distance / self.cruise_speed
    }

    fn validate(&self, key: &str) -> Result<()> {
        let invalid = |reason: &str| AviationError::InvalidProfile {
            key: key.to_string(),
            reason: reason.to_string(),
        };
        if !self.fuel_rate.is_finite() || self.fuel_rate <= 0.0 {
            return Err(invalid("fuel_rate must be greater than zero"));
        }
        if !self.cruise_speed.is_finite() || self.cruise_speed <= 0.0 {
            return Err(invalid("cruise_speed must be greater than zero"));
        }
        Ok(())
    }
}

/// Aircraft profiles with a mandatory fallback entry.
///
/// Serializes as a flat map of type key to profile, `default` included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, AircraftProfile>",
    into = "BTreeMap<String, AircraftProfile>"
)]
pub struct AircraftTable {
    profiles: BTreeMap<String, AircraftProfile>,
    fallback: AircraftProfile,
}

impl Default for AircraftTable {
    fn default() -> Self {
        let profiles = BTreeMap::from([
            ("boeing_737".to_string(), AircraftProfile::new(2.5, 800.0, 5000.0, 26_000.0)),
            ("airbus_a320".to_string(), AircraftProfile::new(2.3, 820.0, 5500.0, 24_000.0)),
            ("boeing_777".to_string(), AircraftProfile::new(4.2, 900.0, 15_000.0, 180_000.0)),
            ("airbus_a380".to_string(), AircraftProfile::new(5.8, 900.0, 15_000.0, 320_000.0)),
            ("cessna_172".to_string(), AircraftProfile::new(0.8, 200.0, 1000.0, 200.0)),
        ]);
        Self {
            profiles,
            fallback: AircraftProfile::new(2.0, 600.0, 3000.0, 5000.0),
        }
    }
}

impl AircraftTable {
    /// Build a table from explicit profiles.
    ///
    /// Keys are lowercased. Fails if `default` is missing or any profile has
    /// a non-positive fuel rate or cruise speed.
    pub fn from_profiles<I, K>(profiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, AircraftProfile)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, profile) in profiles {
            let key = key.into().to_lowercase();
            profile.validate(&key)?;
            map.insert(key, profile);
        }
        let fallback = map
            .remove(DEFAULT_PROFILE_KEY)
            .ok_or(AviationError::MissingDefaultProfile)?;
        Ok(Self {
            profiles: map,
            fallback,
        })
    }

    /// Look up a profile, falling back to the default profile for unknown types.
    pub fn profile(&self, aircraft_type: &str) -> &AircraftProfile {
        let key = aircraft_type.to_lowercase();
        match self.profiles.get(&key) {
            Some(profile) => profile,
            None => {
                if key != DEFAULT_PROFILE_KEY {
                    tracing::debug!(
                        aircraft_type = %key,
                        "Unknown aircraft type, using default profile"
                    );
                }
                &self.fallback
            }
        }
    }

    /// Exact lookup without fallback.
    pub fn get(&self, aircraft_type: &str) -> Option<&AircraftProfile> {
        let key = aircraft_type.to_lowercase();
        if key == DEFAULT_PROFILE_KEY {
            return Some(&self.fallback);
        }
        self.profiles.get(&key)
    }

    /// The fallback profile.
    pub fn fallback(&self) -> &AircraftProfile {
        &self.fallback
    }

    /// Type keys of the named (non-fallback) profiles, sorted.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

impl TryFrom<BTreeMap<String, AircraftProfile>> for AircraftTable {
    type Error = AviationError;

    fn try_from(map: BTreeMap<String, AircraftProfile>) -> Result<Self> {
        Self::from_profiles(map)
    }
}

impl From<AircraftTable> for BTreeMap<String, AircraftProfile> {
    fn from(table: AircraftTable) -> Self {
        let mut map = table.profiles;
        map.insert(DEFAULT_PROFILE_KEY.to_string(), table.fallback);
        map
    }
}
