//! Weather classification for flight planning.
//!
//! Conditions are graded by an ordered cascade of checks: visibility first,
//! then wind, pressure and temperature. The first check that trips decides
//! the grade, so a dangerous visibility reading wins over calm wind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall flying conditions, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    Dangerous,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Dangerous => "dangerous",
        }
    }

    /// Short human-readable description.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent conditions for flight",
            Self::Good => "Good conditions for flight",
            Self::Fair => "Satisfactory conditions",
            Self::Poor => "Poor conditions, caution required",
            Self::Dangerous => "Dangerous conditions, flight not recommended",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flight advisory raised by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    StrongWind,
    LowPressure,
    HighPressure,
    LimitedVisibility,
    ExtremeCold,
    ExtremeHeat,
    /// Nothing else applies
    Favorable,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::StrongWind => "Caution: strong wind",
            Self::LowPressure => "Attention: low pressure",
            Self::HighPressure => "Attention: high pressure",
            Self::LimitedVisibility => "Limited visibility",
            Self::ExtremeCold => "Extremely low temperature",
            Self::ExtremeHeat => "Extremely high temperature",
            Self::Favorable => "Conditions are favorable for flight",
        };
        f.write_str(text)
    }
}

/// Visibility limits in meters. Lower readings are worse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
    pub dangerous: f64,
}

impl Default for VisibilityThresholds {
    fn default() -> Self {
        Self {
            excellent: 10_000.0,
            good: 5000.0,
            fair: 2000.0,
            poor: 1000.0,
            dangerous: 500.0,
        }
    }
}

/// Wind limits in m/s. Higher readings are worse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
    pub dangerous: f64,
}

impl Default for WindThresholds {
    fn default() -> Self {
        Self {
            excellent: 10.0,
            good: 15.0,
            fair: 20.0,
            poor: 25.0,
            dangerous: 30.0,
        }
    }
}

/// Thresholds used by [`WeatherAnalyzer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherThresholds {
    pub visibility_m: VisibilityThresholds,
    pub wind_mps: WindThresholds,
    /// Reference sea-level pressure in hPa
    pub pressure_baseline_hpa: f64,
    /// Deviation from baseline that grades as poor
    pub pressure_poor_deviation_hpa: f64,
    pub pressure_good_deviation_hpa: f64,
    pub pressure_excellent_deviation_hpa: f64,
    /// Temperature range in °C outside which conditions grade as poor
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    /// Advisory limits
    pub low_pressure_hpa: f64,
    pub high_pressure_hpa: f64,
    pub cold_advisory_c: f64,
    pub heat_advisory_c: f64,
}

impl Default for WeatherThresholds {
    fn default() -> Self {
        Self {
            visibility_m: VisibilityThresholds::default(),
            wind_mps: WindThresholds::default(),
            pressure_baseline_hpa: 1013.0,
            pressure_poor_deviation_hpa: 50.0,
            pressure_good_deviation_hpa: 30.0,
            pressure_excellent_deviation_hpa: 20.0,
            min_temperature_c: -40.0,
            max_temperature_c: 50.0,
            low_pressure_hpa: 1000.0,
            high_pressure_hpa: 1030.0,
            cold_advisory_c: -20.0,
            heat_advisory_c: 40.0,
        }
    }
}

/// Observed conditions together with their grade and advisories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// °C
    pub temperature: f64,
    /// hPa
    pub pressure: f64,
    /// m/s
    pub wind_speed: f64,
    /// Meters, if observed
    pub visibility: Option<f64>,
    pub overall_condition: WeatherCondition,
    pub recommendations: Vec<Advisory>,
}

/// Grades weather observations against configurable thresholds.
#[derive(Debug, Clone, Default)]
pub struct WeatherAnalyzer {
    thresholds: WeatherThresholds,
}

impl WeatherAnalyzer {
    pub fn new(thresholds: WeatherThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &WeatherThresholds {
        &self.thresholds
    }

    /// Grade the conditions and collect advisories.
    pub fn analyze_conditions(
        &self,
        temperature: f64,
        pressure: f64,
        wind_speed: f64,
        visibility: Option<f64>,
    ) -> WeatherReport {
        WeatherReport {
            temperature,
            pressure,
            wind_speed,
            visibility,
            overall_condition: self
                .overall_condition(temperature, pressure, wind_speed, visibility),
            recommendations: self.recommendations(temperature, pressure, wind_speed, visibility),
        }
    }

    /// Overall grade. Checks run in a fixed order and the first hit wins.
    pub fn overall_condition(
        &self,
        temperature: f64,
        pressure: f64,
        wind_speed: f64,
        visibility: Option<f64>,
    ) -> WeatherCondition {
        let t = &self.thresholds;

        if let Some(visibility) = visibility {
            if visibility < t.visibility_m.dangerous {
                return WeatherCondition::Dangerous;
            }
            if visibility < t.visibility_m.poor {
                return WeatherCondition::Poor;
            }
        }

        if wind_speed > t.wind_mps.dangerous {
            return WeatherCondition::Dangerous;
        }
        if wind_speed > t.wind_mps.poor {
            return WeatherCondition::Poor;
        }

        let pressure_deviation = (pressure - t.pressure_baseline_hpa).abs();
        if pressure_deviation > t.pressure_poor_deviation_hpa {
            return WeatherCondition::Poor;
        }

        if temperature < t.min_temperature_c || temperature > t.max_temperature_c {
            return WeatherCondition::Poor;
        }

        let clear = visibility.map_or(true, |v| v > t.visibility_m.excellent);
        if wind_speed < t.wind_mps.excellent
            && pressure_deviation < t.pressure_excellent_deviation_hpa
            && clear
        {
            WeatherCondition::Excellent
        } else if wind_speed < t.wind_mps.good
            && pressure_deviation < t.pressure_good_deviation_hpa
        {
            WeatherCondition::Good
        } else {
            WeatherCondition::Fair
        }
    }

    /// Advisories for the given conditions; never empty.
    pub fn recommendations(
        &self,
        temperature: f64,
        pressure: f64,
        wind_speed: f64,
        visibility: Option<f64>,
    ) -> Vec<Advisory> {
        let t = &self.thresholds;
        let mut advisories = Vec::new();

        if wind_speed > t.wind_mps.fair {
            advisories.push(Advisory::StrongWind);
        }

        if pressure < t.low_pressure_hpa {
            advisories.push(Advisory::LowPressure);
        } else if pressure > t.high_pressure_hpa {
            advisories.push(Advisory::HighPressure);
        }

        if visibility.is_some_and(|v| v < t.visibility_m.good) {
            advisories.push(Advisory::LimitedVisibility);
        }

        if temperature < t.cold_advisory_c {
            advisories.push(Advisory::ExtremeCold);
        } else if temperature > t.heat_advisory_c {
            advisories.push(Advisory::ExtremeHeat);
        }

        if advisories.is_empty() {
            advisories.push(Advisory::Favorable);
        }
        advisories
    }

    /// Wind-chill ("feels like") temperature in °C.
    ///
    /// `wind_speed` is in m/s. Below 1.3 m/s the air temperature is returned
    /// unchanged.
    pub fn wind_chill(temperature: f64, wind_speed: f64) -> f64 {
        if wind_speed < 1.3 {
            return temperature;
        }
        let v = (wind_speed * 3.6).powf(0.16);
        13.12 + 0.6215 * temperature - 11.37 * v + 0.3965 * temperature * v
    }

    /// Short description of a graded report.
    pub fn summary(report: &WeatherReport) -> &'static str {
        report.overall_condition.summary()
    }
}
