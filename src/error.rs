//! Error types for planning and route rendering.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Structural failures that stop a planning run.
///
/// "No feasible plan" is not an error; it is an empty itinerary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// One or both window bounds were not supplied.
    #[error("planning window is missing a start or end time")]
    MissingWindow,

    /// The window ends before it starts.
    #[error("planning window ends ({end}) before it starts ({start})")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("minimum dwell must not be negative")]
    NegativeDwell,

    /// A candidate with an empty time range or an out-of-range coordinate.
    #[error("malformed event {id}: {reason}")]
    MalformedEvent { id: String, reason: String },
}

/// Failures talking to the route geometry service.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("route request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered but had no route for the waypoints.
    #[error("no route found: {0}")]
    NoRoute(String),
}
