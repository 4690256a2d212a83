//! itinerary-planner core
//!
//! Greedy, preference-ranked planning of multi-event outings under time
//! windows, travel time and a minimum dwell per stop.

pub mod traits;
pub mod coordinate;
pub mod error;
pub mod haversine;
pub mod feasibility;
pub mod scoring;
pub mod candidates;
pub mod solver;
pub mod route;
pub mod osrm;
pub mod polyline;

pub use coordinate::Coordinate;
pub use error::{PlanError, RouteError};
pub use solver::{build_itinerary, build_itinerary_with, Itinerary, ItineraryStop, PlanOptions, PlanningWindow};
