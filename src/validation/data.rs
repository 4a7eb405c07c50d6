//! Boundary checks for coordinate inputs
//!
//! NaN or out-of-range values fail fast here with a descriptive error
//! instead of propagating silently through the arithmetic.

use crate::core::Coordinate;
use crate::validation::error::GeometryError;

/// Check that a coordinate is finite and within geographic range.
pub fn validate_coordinate(c: &Coordinate) -> Result<(), GeometryError> {
    if !c.lat.is_finite() || !c.lng.is_finite() {
        return Err(GeometryError::NonFiniteCoordinate {
            lat: c.lat,
            lng: c.lng,
        });
    }
    if c.lat < -90.0 || c.lat > 90.0 {
        return Err(GeometryError::InvalidLatitude { value: c.lat });
    }
    if c.lng < -180.0 || c.lng > 180.0 {
        return Err(GeometryError::InvalidLongitude { value: c.lng });
    }
    Ok(())
}

/// Check every point of a polyline.
pub fn validate_path(path: &[Coordinate]) -> Result<(), GeometryError> {
    for point in path {
        validate_coordinate(point)?;
    }
    Ok(())
}
