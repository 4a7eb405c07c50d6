use std::fmt;

/// Invalid numeric input rejected at a geometry boundary
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    InvalidLatitude { value: f64 },
    InvalidLongitude { value: f64 },
    NonFiniteCoordinate { lat: f64, lng: f64 },
    InvalidRadius { radius_km: f64 },
    ZeroPointCount,
    PolarCenter { lat: f64 },
    InvalidSpacing { spacing_m: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidLatitude { value } => {
                write!(f, "Latitude {} out of range [-90, 90]", value)
            }
            GeometryError::InvalidLongitude { value } => {
                write!(f, "Longitude {} out of range [-180, 180]", value)
            }
            GeometryError::NonFiniteCoordinate { lat, lng } => {
                write!(f, "Coordinate ({}, {}) is not finite", lat, lng)
            }
            GeometryError::InvalidRadius { radius_km } => {
                write!(f, "Radius {} km is not a finite non-negative value", radius_km)
            }
            GeometryError::ZeroPointCount => {
                write!(f, "Circle generation requires at least one point")
            }
            GeometryError::PolarCenter { lat } => {
                write!(f, "Center latitude {} too close to a pole for the flat-Earth offset", lat)
            }
            GeometryError::InvalidSpacing { spacing_m } => {
                write!(f, "Spacing {} m is not a finite value", spacing_m)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
