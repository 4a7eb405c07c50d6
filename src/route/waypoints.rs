//! Waypoint plans for the external routing collaborator

use crate::core::{Coordinate, Landmark};
use crate::geometry::circle_points;
use crate::route::proximity::within_radius;
use crate::validation::GeometryError;

/// Route request payload: a walk anchored at `origin` that should pass
/// through `waypoints`, handed to the routing service untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointPlan {
    pub origin: Coordinate,
    pub waypoints: Vec<Coordinate>,
}

impl WaypointPlan {
    /// Circular walk of `radius_km` around `center`: `n` circle points
    /// plus the position of every known landmark inside the circle.
    pub fn circular(
        center: Coordinate,
        radius_km: f64,
        n: usize,
        landmarks: &[Landmark],
    ) -> Result<Self, GeometryError> {
        let mut waypoints = circle_points(center, radius_km, n)?;
        waypoints.extend(
            within_radius(center, landmarks, radius_km * 1000.0)
                .into_iter()
                .map(|lm| lm.position),
        );
        Ok(Self {
            origin: center,
            waypoints,
        })
    }
}
