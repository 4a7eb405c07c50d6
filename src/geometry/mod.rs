//! Pure geodesic geometry: distance, circle waypoints, resampling
//!
//! Everything here is a side-effect-free function over coordinates.
//! The flat-Earth shortcuts in circle generation and interpolation are
//! deliberate; see the function docs.

pub mod circle;
pub mod distance;
pub mod interpolate;

pub use circle::circle_points;
pub use distance::distance;
pub use interpolate::interpolate;
