//! Dog Walk Companion Core
//!
//! Pure geodesic geometry, proximity and waypoint planning, walk
//! guidance and landmark persistence for a map-based dog walk
//! companion. Map rendering, routing and places search stay with
//! external collaborators; this crate computes everything they are
//! fed with and reacts to everything they report back.

pub mod core;
pub mod geometry;
pub mod guide;
pub mod route;
pub mod storage;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Coordinate, Landmark, Path, EARTH_RADIUS_M};
pub use geometry::{circle_points, distance, interpolate};
pub use guide::{GuideEngine, GuideEvent};
pub use route::{find_within, nearest, within_radius};
pub use route::{PawTrail, RequestId, RequestTracker, WaypointPlan};
pub use storage::{
    JsonFileStore, KeyValueStore, LandmarkStore, MemoryStore, StorageError, LANDMARKS_KEY,
};
pub use utils::{ConfigError, WalkConfig};
pub use validation::{validate_coordinate, validate_path, GeometryError};
