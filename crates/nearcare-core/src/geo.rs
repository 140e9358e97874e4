//! Great-circle distance between two coordinates.

use crate::types::Coordinates;

/// Mean Earth radius (IUGG) in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance between `a` and `b` in kilometres.
#[must_use]
pub fn haversine_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
