//! Proximity scans, waypoint plans, request tracking and the paw trail

pub mod proximity;
pub mod request;
pub mod trail;
pub mod waypoints;

pub use proximity::{find_within, nearest, within_radius};
pub use request::{RequestId, RequestTracker};
pub use trail::PawTrail;
pub use waypoints::WaypointPlan;
