//! Nearby-landmark scans

use crate::core::{Coordinate, Landmark};
use crate::geometry::distance;

/// First landmark within `threshold_m` of `pos`, if any.
///
/// Linear scan with first-match semantics: when several landmarks
/// qualify, which one is returned depends only on list order.
pub fn find_within(
    pos: Coordinate,
    landmarks: &[Landmark],
    threshold_m: f64,
) -> Option<&Landmark> {
    landmarks
        .iter()
        .find(|lm| distance(pos, lm.position) < threshold_m)
}

/// Nearest landmark to `pos` and its distance in meters.
pub fn nearest(pos: Coordinate, landmarks: &[Landmark]) -> Option<(&Landmark, f64)> {
    landmarks
        .iter()
        .map(|lm| (lm, distance(pos, lm.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Landmarks lying within `radius_m` of `center`.
pub fn within_radius(
    center: Coordinate,
    landmarks: &[Landmark],
    radius_m: f64,
) -> Vec<&Landmark> {
    landmarks
        .iter()
        .filter(|lm| distance(center, lm.position) <= radius_m)
        .collect()
}
