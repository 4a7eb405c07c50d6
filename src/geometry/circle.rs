//! Circle waypoint generation

use std::f64::consts::PI;

use crate::core::{Coordinate, METERS_PER_DEGREE};
use crate::validation::{validate_coordinate, GeometryError};

/// Generate `n` coordinates approximating a circle of `radius_km`
/// around `center`.
///
/// Points are evenly spaced in bearing, starting due north and
/// proceeding clockwise. The radial offset uses a flat-Earth local
/// approximation (one degree of latitude ~ 111,000 m) with the
/// longitude delta scaled by the cosine of the center latitude to
/// correct for meridian convergence. Not geodesically exact, but the
/// error is negligible at walk-sized radii and keeping the
/// approximation keeps output compatible with the route plans the
/// crate was built around.
///
/// A center too close to a pole makes the longitude scale degenerate
/// and is rejected.
pub fn circle_points(
    center: Coordinate,
    radius_km: f64,
    n: usize,
) -> Result<Vec<Coordinate>, GeometryError> {
    validate_coordinate(&center)?;
    if n == 0 {
        return Err(GeometryError::ZeroPointCount);
    }
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(GeometryError::InvalidRadius { radius_km });
    }

    let lng_scale = center.lat.to_radians().cos();
    if lng_scale.abs() < 1e-9 {
        return Err(GeometryError::PolarCenter { lat: center.lat });
    }

    let radius_m = radius_km * 1000.0;
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        points.push(Coordinate {
            lat: center.lat + radius_m * angle.cos() / METERS_PER_DEGREE,
            lng: center.lng + radius_m * angle.sin() / (METERS_PER_DEGREE * lng_scale),
        });
    }
    Ok(points)
}
