//! Greedy itinerary builder.
//!
//! Repeatedly picks the feasible event with the highest affinity (earliest
//! arrival breaks ties, then event id), moves the traveler there, waits out the
//! minimum dwell and repeats until nothing else fits. This is myopic and does
//! not search for a globally optimal tour.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, TimeDelta, Utc};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::candidates::{malformed_reason, validate_candidate};
use crate::coordinate::Coordinate;
use crate::error::PlanError;
use crate::feasibility::{evaluate, Feasibility};
use crate::haversine::{HaversineEstimator, DEFAULT_SPEED_KMH};
use crate::scoring::TagAffinity;
use crate::traits::{AffinityScorer, Event, Id, Profile, TravelTimeEstimator};

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Minimum time at an event for it to count as attended.
    pub min_dwell: TimeDelta,
    /// Assumed travel speed for the default haversine estimator.
    pub speed_kmh: f64,
    /// Fail the run on a malformed candidate instead of skipping it.
    pub reject_malformed: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            min_dwell: TimeDelta::hours(1),
            speed_kmh: DEFAULT_SPEED_KMH,
            reject_malformed: false,
        }
    }
}

/// Outer bounds within which every stop must be attended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanningWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PlanningWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build a window from caller-supplied bounds, either of which may be absent.
    pub fn from_bounds(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, PlanError> {
        let (Some(start), Some(end)) = (start, end) else {
            return Err(PlanError::MissingWindow);
        };
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.end < self.start {
            return Err(PlanError::InvalidWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// One accepted event in visit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryStop<I> {
    pub event_id: I,
    pub arrival: DateTime<Utc>,
    /// `arrival + min_dwell`; the traveler leaves for the next stop here.
    pub departure: DateTime<Utc>,
    /// Travel time from the previous stop (or the origin).
    pub travel: TimeDelta,
    pub score: u32,
}

/// The accepted plan. Empty means no candidate was feasible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary<I> {
    pub stops: Vec<ItineraryStop<I>>,
}

impl<I: Clone> Itinerary<I> {
    pub fn event_ids(&self) -> Vec<I> {
        self.stops.iter().map(|stop| stop.event_id.clone()).collect()
    }

    pub fn into_event_ids(self) -> Vec<I> {
        self.stops.into_iter().map(|stop| stop.event_id).collect()
    }

    pub fn total_travel(&self) -> TimeDelta {
        self.stops
            .iter()
            .fold(TimeDelta::zero(), |total, stop| total + stop.travel)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// A feasible candidate as seen by the tie-break.
#[derive(Debug, Clone, Copy)]
pub struct Choice<'a, I> {
    pub event_id: &'a I,
    pub score: u32,
    pub arrival: DateTime<Utc>,
}

/// Rank two feasible candidates; `Less` means `a` should be picked first.
///
/// Higher score wins, then earlier arrival, then the smaller event id.
pub fn compare_choices<I: Ord>(a: &Choice<'_, I>, b: &Choice<'_, I>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.arrival.cmp(&b.arrival))
        .then_with(|| a.event_id.cmp(b.event_id))
}

/// Simulated traveler for a single run. Never outlives `build_itinerary_with`.
struct ItineraryState<'a, I> {
    position: Coordinate,
    clock: DateTime<Utc>,
    visited: HashSet<&'a I>,
    stops: Vec<ItineraryStop<I>>,
}

impl<'a, I: Id> ItineraryState<'a, I> {
    fn new(origin: Coordinate, start: DateTime<Utc>) -> Self {
        Self {
            position: origin,
            clock: start,
            visited: HashSet::new(),
            stops: Vec::new(),
        }
    }

    fn accept(&mut self, event_id: &'a I, location: Coordinate, stop: ItineraryStop<I>) {
        self.visited.insert(event_id);
        self.position = location;
        self.clock = stop.departure;
        self.stops.push(stop);
    }

    fn finish(self) -> Itinerary<I> {
        Itinerary { stops: self.stops }
    }
}

/// Plan an outing for `profile` using haversine travel times and tag affinity.
pub fn build_itinerary<E, P>(
    candidates: &[E],
    profile: &P,
    window: &PlanningWindow,
    options: &PlanOptions,
) -> Result<Itinerary<E::Id>, PlanError>
where
    E: Event,
    P: Profile,
{
    let estimator = HaversineEstimator::new(options.speed_kmh);
    let scorer = TagAffinity::for_profile(profile);
    build_itinerary_with(candidates, profile.location(), window, &estimator, &scorer, options)
}

/// Plan an outing starting at `origin` with injected travel and scoring models.
pub fn build_itinerary_with<E, T, S>(
    candidates: &[E],
    origin: Coordinate,
    window: &PlanningWindow,
    estimator: &T,
    scorer: &S,
    options: &PlanOptions,
) -> Result<Itinerary<E::Id>, PlanError>
where
    E: Event,
    T: TravelTimeEstimator,
    S: AffinityScorer<E>,
{
    window.validate()?;
    if options.min_dwell < TimeDelta::zero() {
        return Err(PlanError::NegativeDwell);
    }

    for event in candidates {
        if options.reject_malformed {
            validate_candidate(event)?;
        } else if let Some(reason) = malformed_reason(event) {
            debug!(event = ?event.id(), reason, "skipping malformed candidate");
        }
    }

    // Affinity does not depend on the traveler's state.
    let scores: Vec<u32> = candidates.iter().map(|event| scorer.score(event)).collect();
    let mut state = ItineraryState::new(origin, window.start);

    loop {
        let mut best: Option<(usize, Choice<'_, E::Id>, TimeDelta)> = None;

        for (index, event) in candidates.iter().enumerate() {
            if state.visited.contains(event.id()) {
                continue;
            }
            let Feasibility::Feasible { arrival, travel } = evaluate(
                event,
                state.position,
                state.clock,
                window.end,
                options.min_dwell,
                estimator,
            ) else {
                continue;
            };

            let choice = Choice {
                event_id: event.id(),
                score: scores[index],
                arrival,
            };
            let better = match &best {
                Some((_, current, _)) => compare_choices(&choice, current) == Ordering::Less,
                None => true,
            };
            if better {
                best = Some((index, choice, travel));
            }
        }

        let Some((index, choice, travel)) = best else {
            break;
        };

        let winner = &candidates[index];
        // Feasibility already proved arrival + min_dwell fits before the deadline.
        let departure = choice.arrival + options.min_dwell;
        debug!(
            event = ?winner.id(),
            score = choice.score,
            arrival = %choice.arrival,
            "accepted stop"
        );
        state.accept(
            winner.id(),
            winner.location(),
            ItineraryStop {
                event_id: winner.id().clone(),
                arrival: choice.arrival,
                departure,
                travel,
                score: choice.score,
            },
        );
    }

    let itinerary = state.finish();
    info!(
        candidates = candidates.len(),
        stops = itinerary.len(),
        "itinerary planned"
    );
    Ok(itinerary)
}

/// An independent planning run for [`plan_many`].
#[derive(Debug, Clone)]
pub struct PlanRequest<'a, E, P> {
    pub candidates: &'a [E],
    pub profile: &'a P,
    pub window: PlanningWindow,
}

/// Run several planning requests in parallel; results keep the input order.
pub fn plan_many<E, P>(
    requests: &[PlanRequest<'_, E, P>],
    options: &PlanOptions,
) -> Vec<Result<Itinerary<E::Id>, PlanError>>
where
    E: Event + Sync,
    E::Id: Send,
    P: Profile + Sync,
{
    requests
        .par_iter()
        .map(|request| build_itinerary(request.candidates, request.profile, &request.window, options))
        .collect()
}
