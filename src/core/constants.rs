//! Physical constants and walk parameters

/// Mean Earth radius used by the haversine distance (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Approximate length of one degree of latitude (meters)
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Floor applied to interpolation spacing (meters); non-positive
/// spacing would otherwise produce an unbounded number of points
pub const MIN_SPACING_M: f64 = 1.0;
