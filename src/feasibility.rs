//! Feasibility of attending a single candidate event.
//!
//! An event is feasible when the traveler, starting from the current position
//! at the current time, can be present for the minimum dwell before both the
//! event and the planning window end:
//!
//! ```text
//! arrival = max(event.start, now + travel)
//! arrival + min_dwell <= min(event.end, window_end)
//! ```

use chrono::{DateTime, TimeDelta, Utc};

use crate::candidates::malformed_reason;
use crate::coordinate::Coordinate;
use crate::traits::{Event, TravelTimeEstimator};

/// Why a candidate cannot be attended from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// Empty time range or invalid coordinate.
    MalformedEvent,
    /// Timestamp arithmetic overflowed (effectively unreachable).
    Unreachable,
    /// The event ends before the minimum dwell can be completed.
    EventEnded,
    /// The planning window closes before the minimum dwell can be completed.
    WindowClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    Feasible {
        /// Earliest moment the traveler can be at the event while it runs.
        arrival: DateTime<Utc>,
        /// Travel time from the current position.
        travel: TimeDelta,
    },
    Infeasible(InfeasibleReason),
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible { .. })
    }

    pub fn arrival(&self) -> Option<DateTime<Utc>> {
        match self {
            Feasibility::Feasible { arrival, .. } => Some(*arrival),
            Feasibility::Infeasible(_) => None,
        }
    }
}

/// Decide whether `event` can be attended for `min_dwell`.
pub fn evaluate<E, T>(
    event: &E,
    position: Coordinate,
    now: DateTime<Utc>,
    window_end: DateTime<Utc>,
    min_dwell: TimeDelta,
    estimator: &T,
) -> Feasibility
where
    E: Event,
    T: TravelTimeEstimator,
{
    if malformed_reason(event).is_some() {
        return Feasibility::Infeasible(InfeasibleReason::MalformedEvent);
    }

    // Travel never moves the clock backwards.
    let travel = estimator
        .travel_time(position, event.location())
        .max(TimeDelta::zero());
    let Some(ready) = now.checked_add_signed(travel) else {
        return Feasibility::Infeasible(InfeasibleReason::Unreachable);
    };
    let arrival = ready.max(event.starts_at());
    let Some(leave) = arrival.checked_add_signed(min_dwell) else {
        return Feasibility::Infeasible(InfeasibleReason::Unreachable);
    };

    let event_end = event.ends_at();
    if leave <= event_end.min(window_end) {
        Feasibility::Feasible { arrival, travel }
    } else if event_end <= window_end {
        Feasibility::Infeasible(InfeasibleReason::EventEnded)
    } else {
        Feasibility::Infeasible(InfeasibleReason::WindowClosed)
    }
}
