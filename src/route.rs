//! Turning a finished itinerary into something a map can draw.

use std::collections::HashMap;

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;
use crate::solver::Itinerary;
use crate::traits::{Event, RouteGeometryProvider};

/// Resolve accepted event ids back to positions, starting at `origin`.
///
/// Ids with no matching candidate are skipped.
pub fn route_waypoints<E: Event>(
    origin: Coordinate,
    itinerary: &Itinerary<E::Id>,
    candidates: &[E],
) -> Vec<Coordinate> {
    let by_id: HashMap<&E::Id, Coordinate> = candidates
        .iter()
        .map(|event| (event.id(), event.location()))
        .collect();

    std::iter::once(origin)
        .chain(
            itinerary
                .stops
                .iter()
                .filter_map(|stop| by_id.get(&stop.event_id).copied()),
        )
        .collect()
}

/// Fetch a drawable route from `origin` through every stop.
pub fn render_route<E, R>(
    provider: &R,
    origin: Coordinate,
    itinerary: &Itinerary<E::Id>,
    candidates: &[E],
) -> Result<Polyline, RouteError>
where
    E: Event,
    R: RouteGeometryProvider,
{
    provider.route_for(&route_waypoints(origin, itinerary, candidates))
}
