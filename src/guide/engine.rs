//! Walk guiding orchestration
//!
//! The state a map widget would scatter across globals lives here in
//! one explicit context object: current position, the saved and
//! discovered landmark lists, the route-request counter and the paw
//! trail. Every external input (a position fix, a routing callback, a
//! places-search result batch) goes through a method that returns
//! plain events; the rendering layer decides what to do with them.

use tracing::{debug, warn};

use crate::core::{Coordinate, Landmark};
use crate::geometry::distance;
use crate::guide::events::GuideEvent;
use crate::route::{find_within, nearest, PawTrail, RequestId, RequestTracker, WaypointPlan};
use crate::utils::WalkConfig;
use crate::validation::GeometryError;

pub struct GuideEngine {
    config: WalkConfig,
    saved: Vec<Landmark>,
    discovered: Vec<Landmark>,
    position: Option<Coordinate>,
    requests: RequestTracker,
    trail: PawTrail,
    near_landmark: bool,
    guiding: bool,
}

impl GuideEngine {
    pub fn new(config: WalkConfig) -> Self {
        let trail = PawTrail::new(config.paw_spacing_m, config.max_paw_prints);
        Self {
            config,
            saved: Vec::new(),
            discovered: Vec::new(),
            position: None,
            requests: RequestTracker::new(),
            trail,
            near_landmark: false,
            guiding: true,
        }
    }

    /// Engine pre-populated with previously saved landmarks.
    pub fn with_landmarks(config: WalkConfig, saved: Vec<Landmark>) -> Self {
        let mut engine = Self::new(config);
        engine.saved = saved;
        engine
    }

    /// Current position, or the configured fallback until the first
    /// fix arrives.
    pub fn position_or_fallback(&self) -> Coordinate {
        match self.position {
            Some(pos) => pos,
            None => {
                warn!(
                    lat = self.config.fallback_position.lat,
                    lng = self.config.fallback_position.lng,
                    "no position fix yet, using fallback"
                );
                self.config.fallback_position
            }
        }
    }

    /// Enable or disable route guidance toward discovered landmarks.
    pub fn set_guiding(&mut self, guiding: bool) {
        self.guiding = guiding;
    }

    pub fn saved_landmarks(&self) -> &[Landmark] {
        &self.saved
    }

    pub fn add_saved_landmark(&mut self, landmark: Landmark) {
        self.saved.push(landmark);
    }

    /// Remove the first saved landmark with the given name.
    pub fn remove_saved_landmark(&mut self, name: &str) -> Option<Landmark> {
        let idx = self.saved.iter().position(|lm| lm.name == name)?;
        Some(self.saved.remove(idx))
    }

    pub fn discovered_landmarks(&self) -> &[Landmark] {
        &self.discovered
    }

    /// Absorb a batch of places-search results into the discovered set.
    pub fn absorb_discovered(&mut self, results: Vec<Landmark>) {
        debug!(count = results.len(), "absorbing discovered landmarks");
        self.discovered.extend(results);
    }

    /// Paw prints currently on the ground, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = &Coordinate> {
        self.trail.prints()
    }

    /// Feed a fresh position fix through the guidance pipeline.
    ///
    /// Checks discovered landmarks for proximity, decides whether to
    /// request a route to the nearest one or to clear guidance, and
    /// advances the paw trail. Returns the events in that order.
    pub fn update_position(&mut self, pos: Coordinate) -> Vec<GuideEvent> {
        self.position = Some(pos);
        let mut events = Vec::new();

        match find_within(pos, &self.discovered, self.config.nearby_threshold_m) {
            Some(lm) => {
                events.push(GuideEvent::NearbyLandmark {
                    name: lm.name.clone(),
                    distance_m: distance(pos, lm.position),
                });
                self.near_landmark = true;
            }
            None => {
                if self.near_landmark {
                    events.push(GuideEvent::LeftNearbyZone);
                }
                self.near_landmark = false;
            }
        }

        if self.guiding {
            if let Some((lm, dist)) = nearest(pos, &self.discovered) {
                if dist > self.config.min_guide_distance_m {
                    let id = self.requests.begin();
                    events.push(GuideEvent::RouteRequested {
                        id,
                        origin: pos,
                        destination: lm.position,
                    });
                } else {
                    self.trail.clear();
                    events.push(GuideEvent::RouteCleared);
                }
            }
        }

        if let Some(print) = self.trail.advance(pos) {
            events.push(GuideEvent::PawPrintDropped { position: print });
        }
        events
    }

    /// Routing-service callback with the resolved route polyline.
    ///
    /// Returns the paw-print positions to render along the route, or
    /// `None` when a newer request has superseded this one.
    pub fn route_ready(&mut self, id: RequestId, path: &[Coordinate]) -> Option<Vec<Coordinate>> {
        if !self.requests.is_current(id) {
            debug!(request = id.id(), "dropping superseded route callback");
            return None;
        }
        match PawTrail::along_path(path, self.config.paw_spacing_m) {
            Ok(points) => Some(points),
            Err(err) => {
                warn!(error = %err, "route path rejected");
                None
            }
        }
    }

    /// Active configuration, e.g. for driving the places collaborator
    /// with the configured search radius.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Waypoint plan with the configured default walk radius.
    pub fn plan_default_walk(&self) -> Result<WaypointPlan, GeometryError> {
        self.plan_walk(self.config.default_walk_radius_km)
    }

    /// Waypoint plan for a circular walk around the current (or
    /// fallback) position, ready for the routing service.
    pub fn plan_walk(&self, radius_km: f64) -> Result<WaypointPlan, GeometryError> {
        WaypointPlan::circular(
            self.position_or_fallback(),
            radius_km,
            self.config.circle_waypoint_count,
            &self.discovered,
        )
    }
}
