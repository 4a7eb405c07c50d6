//! Polyline resampling

use crate::core::{Coordinate, MIN_SPACING_M};
use crate::geometry::distance;
use crate::validation::{validate_path, GeometryError};

/// Resample `path` so consecutive points sit roughly `spacing_m` apart.
///
/// Each segment is cut into `ceil(length / spacing)` pieces and the
/// latitude and longitude are interpolated linearly and independently.
/// No spherical slerp; the straight-line approximation holds for
/// walk-length segments and matches the routes the map layer renders.
///
/// Output starts at `path[0]`, and segment endpoints are duplicated at
/// segment boundaries (the end of segment *i* equals the start of
/// segment *i+1*); callers wanting a deduplicated line must drop
/// adjacent duplicates themselves. Fewer than two input points yields
/// an empty output.
///
/// Spacing below [`MIN_SPACING_M`] is clamped to it; non-finite
/// spacing is an error.
pub fn interpolate(path: &[Coordinate], spacing_m: f64) -> Result<Vec<Coordinate>, GeometryError> {
    if !spacing_m.is_finite() {
        return Err(GeometryError::InvalidSpacing { spacing_m });
    }
    validate_path(path)?;
    if path.len() < 2 {
        return Ok(Vec::new());
    }

    let spacing = spacing_m.max(MIN_SPACING_M);
    let mut out = Vec::new();
    for pair in path.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        // At least the two endpoints per segment, even when the
        // segment has zero length
        let steps = ((distance(start, end) / spacing).ceil() as usize).max(1);
        for i in 0..=steps {
            let frac = i as f64 / steps as f64;
            out.push(Coordinate {
                lat: start.lat + (end.lat - start.lat) * frac,
                lng: start.lng + (end.lng - start.lng) * frac,
            });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_segment() -> (Coordinate, Coordinate) {
        (
            Coordinate::new(53.0793, 8.8017),
            Coordinate::new(53.0843, 8.8017),
        )
    }

    #[test]
    fn test_single_point_yields_empty() {
        let path = vec![Coordinate::new(53.0, 8.8)];
        assert!(interpolate(&path, 10.0).unwrap().is_empty());
        assert!(interpolate(&[], 10.0).unwrap().is_empty());
    }

    #[test]
    fn test_endpoints_preserved() {
        let (a, b) = walk_segment();
        let points = interpolate(&[a, b], 25.0).unwrap();
        assert_eq!(points[0], a);
        assert_eq!(*points.last().unwrap(), b);
    }

    #[test]
    fn test_point_count_covers_distance() {
        let (a, b) = walk_segment();
        let spacing = 25.0;
        let points = interpolate(&[a, b], spacing).unwrap();
        let min_points = (distance(a, b) / spacing) as usize;
        assert!(points.len() >= min_points, "{} < {}", points.len(), min_points);
        // Never fewer points than the input path
        assert!(points.len() >= 2);
    }

    #[test]
    fn test_segment_boundaries_are_duplicated() {
        let a = Coordinate::new(53.0793, 8.8017);
        let b = Coordinate::new(53.0803, 8.8017);
        let c = Coordinate::new(53.0803, 8.8037);
        let points = interpolate(&[a, b, c], 20.0).unwrap();
        let joint = points
            .windows(2)
            .filter(|w| w[0] == b && w[1] == b)
            .count();
        assert_eq!(joint, 1);
    }

    #[test]
    fn test_spacing_between_samples() {
        let (a, b) = walk_segment();
        let points = interpolate(&[a, b], 25.0).unwrap();
        for w in points.windows(2) {
            let d = distance(w[0], w[1]);
            assert!(d <= 26.0, "gap of {} m", d);
        }
    }

    #[test]
    fn test_non_positive_spacing_is_clamped() {
        let (a, b) = walk_segment();
        // ~556 m segment; with the 1 m floor this stays bounded
        let points = interpolate(&[a, b], 0.0).unwrap();
        assert!(points.len() > 100);
        assert!(points.len() < 1200);
        let negative = interpolate(&[a, b], -5.0).unwrap();
        assert_eq!(points.len(), negative.len());
    }

    #[test]
    fn test_nan_spacing_rejected() {
        let (a, b) = walk_segment();
        assert!(matches!(
            interpolate(&[a, b], f64::NAN),
            Err(GeometryError::InvalidSpacing { .. })
        ));
    }

    #[test]
    fn test_invalid_path_rejected() {
        let path = vec![Coordinate::new(53.0, 8.8), Coordinate::new(99.0, 8.8)];
        assert!(matches!(
            interpolate(&path, 10.0),
            Err(GeometryError::InvalidLatitude { .. })
        ));
    }

    #[test]
    fn test_coincident_segment_keeps_both_endpoints() {
        let a = Coordinate::new(53.0, 8.8);
        let points = interpolate(&[a, a], 10.0).unwrap();
        assert_eq!(points, vec![a, a]);
    }
}
