//! Candidate intake checks.
//!
//! Region containment happens upstream; these helpers only reject malformed
//! events and apply the optional window/radius narrowing callers usually run
//! before planning.

use crate::coordinate::Coordinate;
use crate::error::PlanError;
use crate::haversine::haversine_km;
use crate::solver::PlanningWindow;
use crate::traits::Event;

/// Default search radius around the origin, in kilometers.
pub const DEFAULT_ORIGIN_RADIUS_KM: f64 = 50.0;

/// Why an event cannot be planned at all, if it cannot.
pub(crate) fn malformed_reason<E: Event>(event: &E) -> Option<&'static str> {
    if event.starts_at() >= event.ends_at() {
        Some("event must start before it ends")
    } else if !event.location().is_valid() {
        Some("event location is outside the valid coordinate range")
    } else {
        None
    }
}

/// Reject events with an empty time range or an invalid coordinate.
pub fn validate_candidate<E: Event>(event: &E) -> Result<(), PlanError> {
    match malformed_reason(event) {
        Some(reason) => Err(PlanError::MalformedEvent {
            id: format!("{:?}", event.id()),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone)]
pub struct CandidateFilter {
    /// Drop events farther than this from the origin.
    pub max_origin_radius_km: Option<f64>,
    /// Drop events that start before or end after the planning window.
    pub require_within_window: bool,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            max_origin_radius_km: Some(DEFAULT_ORIGIN_RADIUS_KM),
            require_within_window: true,
        }
    }
}

/// Keep well-formed events matching `filter`, preserving input order.
pub fn filter_candidates<'a, E: Event>(
    events: &'a [E],
    origin: Coordinate,
    window: &PlanningWindow,
    filter: &CandidateFilter,
) -> Vec<&'a E> {
    events
        .iter()
        .filter(|event| malformed_reason(*event).is_none())
        .filter(|event| {
            !filter.require_within_window
                || (event.starts_at() >= window.start && event.ends_at() <= window.end)
        })
        .filter(|event| match filter.max_origin_radius_km {
            Some(radius) => haversine_km(origin, event.location()) <= radius,
            None => true,
        })
        .collect()
}
