//! Fuel burn, reserve and efficiency calculations.

use serde::{Deserialize, Serialize};

use crate::aircraft::{AircraftProfile, AircraftTable};

/// Fraction of an hour of cruise burn held back for the hold reserve (30 min).
const HOLD_RESERVE_HOURS: f64 = 0.5;
/// Contingency share of trip fuel.
const CONTINGENCY_FRACTION: f64 = 0.05;

const SHORT_HAUL_KM: f64 = 1000.0;
const MEDIUM_HAUL_KM: f64 = 3000.0;

/// Fuel burn for a single leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumption {
    /// Liters for the whole leg
    pub total_fuel: f64,
    /// Adjusted burn rate, liters per 100 km
    pub fuel_per_100km: f64,
    /// Liters per hour at cruise
    pub fuel_per_hour: f64,
    /// Hours at cruise speed
    pub flight_time: f64,
    /// km
    pub distance: f64,
}

/// One row of an efficiency comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyEntry {
    /// Type key as supplied by the caller
    pub aircraft_type: String,
    /// Liters for the whole leg
    pub fuel_consumption: f64,
    /// km per liter
    pub efficiency: f64,
    pub flight_time: f64,
    pub fuel_per_100km: f64,
}

/// Fuel model over an aircraft profile table.
#[derive(Debug, Clone, Default)]
pub struct FuelCalculator {
    aircraft: AircraftTable,
}

impl FuelCalculator {
    pub fn new(aircraft: AircraftTable) -> Self {
        Self { aircraft }
    }

    pub fn aircraft(&self) -> &AircraftTable {
        &self.aircraft
    }

    /// Profile for `aircraft_type`, or the default profile if the type is unknown.
    pub fn aircraft_info(&self, aircraft_type: &str) -> &AircraftProfile {
        self.aircraft.profile(aircraft_type)
    }

    /// Fuel burn over `distance` km with wind and payload adjustments.
    ///
    /// Both factors multiply the base burn rate and are nominally in
    /// 0.8..=1.2; values outside that range are used as given.
    pub fn fuel_consumption(
        &self,
        distance: f64,
        aircraft_type: &str,
        wind_factor: f64,
        payload_factor: f64,
    ) -> FuelConsumption {
        let profile = self.aircraft.profile(aircraft_type);

        let adjusted_rate = profile.fuel_rate * wind_factor * payload_factor;
        let flight_time = profile.cruise_time(distance);
        let total_fuel = distance / 100.0 * adjusted_rate;
        let fuel_per_hour = if flight_time > 0.0 {
            total_fuel / flight_time
        } else {
            0.0
        };

        FuelConsumption {
            total_fuel,
            fuel_per_100km: adjusted_rate,
            fuel_per_hour,
            flight_time,
            distance,
        }
    }

    /// [`FuelCalculator::fuel_consumption`] with neutral wind and payload.
    pub fn fuel_consumption_nominal(&self, distance: f64, aircraft_type: &str) -> FuelConsumption {
        self.fuel_consumption(distance, aircraft_type, 1.0, 1.0)
    }

    /// Kilometers per liter; 0 when no fuel was used.
    pub fn fuel_efficiency(distance: f64, fuel_used: f64) -> f64 {
        if fuel_used <= 0.0 {
            return 0.0;
        }
        distance / fuel_used
    }

    /// Cost of the leg at `price_per_liter`.
    pub fn fuel_cost(consumption: &FuelConsumption, price_per_liter: f64) -> f64 {
        consumption.total_fuel * price_per_liter
    }

    /// Cruise speed that minimizes burn for the leg length.
    ///
    /// Short legs (< 1000 km) fly at 90% of cruise, medium legs (< 3000 km)
    /// at 95%, long legs at full cruise speed.
    pub fn optimal_speed(&self, aircraft_type: &str, distance: f64) -> f64 {
        let cruise = self.aircraft.profile(aircraft_type).cruise_speed;
        if distance < SHORT_HAUL_KM {
            cruise * 0.9
        } else if distance < MEDIUM_HAUL_KM {
            cruise * 0.95
        } else {
            cruise
        }
    }

    /// Reserve fuel: 30 minutes of cruise burn plus 5% of trip fuel.
    pub fn fuel_reserve(&self, aircraft_type: &str, distance: f64) -> f64 {
        let trip = self.fuel_consumption_nominal(distance, aircraft_type);
        trip.fuel_per_hour * HOLD_RESERVE_HOURS + trip.total_fuel * CONTINGENCY_FRACTION
    }

    /// Rank aircraft types by fuel efficiency over `distance`, best first.
    ///
    /// Every requested type yields one entry, duplicates included. Equal
    /// efficiencies keep their input order.
    pub fn compare_aircraft_efficiency<S: AsRef<str>>(
        &self,
        distance: f64,
        aircraft_types: &[S],
    ) -> Vec<EfficiencyEntry> {
        let mut results: Vec<EfficiencyEntry> = aircraft_types
            .iter()
            .map(|aircraft_type| {
                let aircraft_type: &str = aircraft_type.as_ref();
                let consumption = self.fuel_consumption_nominal(distance, aircraft_type);
                EfficiencyEntry {
                    aircraft_type: aircraft_type.to_string(),
                    fuel_consumption: consumption.total_fuel,
                    efficiency: Self::fuel_efficiency(distance, consumption.total_fuel),
                    flight_time: consumption.flight_time,
                    fuel_per_100km: consumption.fuel_per_100km,
                }
            })
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fuel_consumption_boeing_737() {
        let calc = FuelCalculator::default();
        let fuel = calc.fuel_consumption_nominal(1000.0, "boeing_737");
        assert!(approx(fuel.total_fuel, 25.0));
        assert!(approx(fuel.fuel_per_100km, 2.5));
        assert!(approx(fuel.flight_time, 1.25));
        assert!(approx(fuel.fuel_per_hour, 20.0));
        assert_eq!(fuel.distance, 1000.0);
    }

    #[test]
    fn test_cessna_burns_less_than_boeing() {
        let calc = FuelCalculator::default();
        let cessna = calc.fuel_consumption_nominal(1000.0, "cessna_172");
        let boeing = calc.fuel_consumption_nominal(1000.0, "boeing_737");
        assert!(cessna.total_fuel < boeing.total_fuel);
    }

    #[test]
    fn test_wind_and_payload_scale_burn_rate() {
        let calc = FuelCalculator::default();
        let fuel = calc.fuel_consumption(1000.0, "boeing_737", 1.2, 1.1);
        assert!(approx(fuel.fuel_per_100km, 2.5 * 1.2 * 1.1));
        assert!(approx(fuel.total_fuel, 10.0 * 2.5 * 1.2 * 1.1));
        // Flight time depends only on cruise speed
        assert!(approx(fuel.flight_time, 1.25));
    }

    #[test]
    fn out_of_range_factors_are_accepted() {
        let calc = FuelCalculator::default();
        let fuel = calc.fuel_consumption(100.0, "default", 3.0, 0.1);
        assert!(approx(fuel.fuel_per_100km, 2.0 * 3.0 * 0.1));
    }

    #[test]
    fn test_unknown_aircraft_uses_default_profile() {
        let calc = FuelCalculator::default();
        let unknown = calc.fuel_consumption_nominal(600.0, "Ilyushin_96");
        let default = calc.fuel_consumption_nominal(600.0, "default");
        assert_eq!(unknown, default);
        assert!(approx(unknown.flight_time, 1.0));
    }

    #[test]
    fn zero_distance_has_zero_hourly_burn() {
        let calc = FuelCalculator::default();
        let fuel = calc.fuel_consumption_nominal(0.0, "airbus_a320");
        assert_eq!(fuel.flight_time, 0.0);
        assert_eq!(fuel.fuel_per_hour, 0.0);
        assert_eq!(fuel.total_fuel, 0.0);
    }

    #[test]
    fn flight_time_follows_profile_cruise_time() {
        let calc = FuelCalculator::default();
        let fuel = calc.fuel_consumption_nominal(1640.0, "airbus_a320");
        let profile = calc.aircraft_info("airbus_a320");
        assert_eq!(fuel.flight_time, profile.cruise_time(1640.0));
        assert!(approx(fuel.flight_time, 2.0));
    }

    #[test]
    fn test_fuel_efficiency_guards_zero_fuel() {
        assert!(approx(FuelCalculator::fuel_efficiency(1000.0, 25.0), 40.0));
        assert_eq!(FuelCalculator::fuel_efficiency(1000.0, 0.0), 0.0);
        assert_eq!(FuelCalculator::fuel_efficiency(1000.0, -5.0), 0.0);
    }

    #[test]
    fn test_fuel_cost() {
        let calc = FuelCalculator::default();
        let fuel = calc.fuel_consumption_nominal(1000.0, "boeing_737");
        assert!(approx(FuelCalculator::fuel_cost(&fuel, 60.0), 1500.0));
    }

    #[test]
    fn test_optimal_speed_bands() {
        let calc = FuelCalculator::default();
        assert!(approx(calc.optimal_speed("boeing_737", 500.0), 720.0));
        assert!(approx(calc.optimal_speed("boeing_737", 1000.0), 760.0));
        assert!(approx(calc.optimal_speed("boeing_737", 2999.0), 760.0));
        assert!(approx(calc.optimal_speed("boeing_737", 3000.0), 800.0));
        assert!(approx(calc.optimal_speed("boeing_737", 8000.0), 800.0));
    }

    #[test]
    fn test_fuel_reserve() {
        let calc = FuelCalculator::default();
        // 30 min at 20 L/h + 5% of 25 L
        assert!(approx(calc.fuel_reserve("boeing_737", 1000.0), 11.25));
    }

    #[test]
    fn test_compare_aircraft_efficiency_sorted_descending() {
        let calc = FuelCalculator::default();
        let ranking =
            calc.compare_aircraft_efficiency(1000.0, &["boeing_737", "airbus_a320", "cessna_172"]);
        assert_eq!(ranking.len(), 3);
        let order: Vec<_> = ranking.iter().map(|e| e.aircraft_type.as_str()).collect();
        assert_eq!(order, vec!["cessna_172", "airbus_a320", "boeing_737"]);
        assert!(ranking.windows(2).all(|w| w[0].efficiency >= w[1].efficiency));
        assert!(approx(ranking[0].efficiency, 125.0));
    }

    #[test]
    fn compare_keeps_duplicates_and_input_order_on_ties() {
        let calc = FuelCalculator::default();
        let ranking = calc.compare_aircraft_efficiency(
            500.0,
            &["Unknown_A", "boeing_737", "default", "Unknown_A"],
        );
        let order: Vec<_> = ranking.iter().map(|e| e.aircraft_type.as_str()).collect();
        // Default-profile entries tie at 50 km/l and keep input order
        assert_eq!(order, vec!["Unknown_A", "default", "Unknown_A", "boeing_737"]);
    }

    #[test]
    fn compare_with_no_types_is_empty() {
        let calc = FuelCalculator::default();
        let empty: [&str; 0] = [];
        assert!(calc.compare_aircraft_efficiency(1000.0, &empty).is_empty());
    }
}
