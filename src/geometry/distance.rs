//! Great-circle distance on a spherical Earth

use crate::core::{Coordinate, EARTH_RADIUS_M};

/// Haversine distance between two coordinates, in meters.
///
/// Uses a spherical-Earth approximation with a 6,371 km radius, which
/// is within ~0.5% of the true geodesic distance and matches the
/// behavior the rest of the crate is calibrated against. Symmetric,
/// non-negative, and zero for coincident points. Defined for any pair
/// of valid coordinates.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}
