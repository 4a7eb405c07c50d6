//! Events handed to the rendering layer

use crate::core::Coordinate;
use crate::route::RequestId;

/// Guidance events produced by [`GuideEngine`](crate::guide::GuideEngine)
/// for the map/rendering layer to act on. The engine never touches the
/// map itself.
#[derive(Debug, Clone, PartialEq)]
pub enum GuideEvent {
    /// The walker came within the nearby threshold of a discovered
    /// landmark; show the speech bubble and bark.
    NearbyLandmark { name: String, distance_m: f64 },
    /// No discovered landmark is nearby anymore; hide the bubble.
    LeftNearbyZone,
    /// A route to the nearest discovered landmark should be requested
    /// from the routing service.
    RouteRequested {
        id: RequestId,
        origin: Coordinate,
        destination: Coordinate,
    },
    /// The walker reached the guidance target; clear the rendered
    /// route and the trail.
    RouteCleared,
    /// A paw print was dropped at the walker's position.
    PawPrintDropped { position: Coordinate },
}
