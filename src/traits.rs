//! Core domain traits for the itinerary planner.
//!
//! These are intentionally minimal. Concrete apps implement them for their
//! own event and user models; persistence and display metadata stay there.

use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, TimeDelta, Utc};

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;

/// Unique identifier for planner entities.
///
/// `Ord` provides the last-resort tie-break between otherwise equal choices.
pub trait Id: Clone + Eq + Hash + Ord + Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + Ord + Debug {}

/// A candidate event that may be placed in an itinerary.
pub trait Event {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Venue coordinates.
    fn location(&self) -> Coordinate;

    fn starts_at(&self) -> DateTime<Utc>;

    fn ends_at(&self) -> DateTime<Utc>;

    /// Topical tags attached to the event.
    fn tags(&self) -> &[String];
}

/// The traveler the plan is built for.
pub trait Profile {
    /// Current or home position; the itinerary starts here.
    fn location(&self) -> Coordinate;

    /// Preference tags.
    fn tags(&self) -> &[String];
}

/// Estimates how long it takes to get from one coordinate to another.
pub trait TravelTimeEstimator {
    fn travel_time(&self, from: Coordinate, to: Coordinate) -> TimeDelta;
}

/// Scores how well an event matches the traveler's preferences.
///
/// Higher is better. A zero score never disqualifies an event.
pub trait AffinityScorer<E: Event> {
    fn score(&self, event: &E) -> u32;
}

/// Provides a drawable route through an ordered list of waypoints.
///
/// Only used to visualize a finished itinerary.
pub trait RouteGeometryProvider {
    fn route_for(&self, waypoints: &[Coordinate]) -> Result<Polyline, RouteError>;
}
