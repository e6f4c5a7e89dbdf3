//! Great-circle distance on a spherical Earth.

/// Mean Earth radius used by every distance calculation in this crate.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate distance between two points in kilometers using the Haversine formula.
///
/// Coordinates are not validated; passing values outside ±90/±180 is the
/// caller's problem.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in kilometers
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = phi2 - phi1;
    let dlambda = lon2.to_radians() - lon1.to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
