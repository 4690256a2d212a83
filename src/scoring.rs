//! Preference scoring.
//!
//! Affinity is a ranking signal, never a filter: an event sharing no tags
//! with the traveler scores 0 and stays eligible.

use std::collections::HashSet;

use crate::traits::{AffinityScorer, Event, Profile};

/// Default weight of the plan owner's tags in a group plan.
pub const DEFAULT_OWNER_WEIGHT: u32 = 2;

/// Number of distinct tags shared by `tags` and the event.
fn shared_tags<E: Event>(tags: &HashSet<&str>, event: &E) -> u32 {
    let event_tags: HashSet<&str> = event.tags().iter().map(String::as_str).collect();
    event_tags.intersection(tags).count() as u32
}

/// Set-intersection size between one profile's tags and the event's tags.
#[derive(Debug, Clone, Default)]
pub struct TagAffinity<'a> {
    tags: HashSet<&'a str>,
}

impl<'a> TagAffinity<'a> {
    pub fn new(tags: &'a [String]) -> Self {
        Self {
            tags: tags.iter().map(String::as_str).collect(),
        }
    }

    pub fn for_profile<P: Profile>(profile: &'a P) -> Self {
        Self::new(profile.tags())
    }
}

impl<E: Event> AffinityScorer<E> for TagAffinity<'_> {
    fn score(&self, event: &E) -> u32 {
        shared_tags(&self.tags, event)
    }
}

/// Affinity for an outing planned by an owner with invited participants.
///
/// Each member's matching tags are counted separately; the owner's count is
/// multiplied by `owner_weight`, every participant's by one, and the results
/// are summed.
#[derive(Debug, Clone)]
pub struct GroupAffinity<'a> {
    owner: HashSet<&'a str>,
    participants: Vec<HashSet<&'a str>>,
    owner_weight: u32,
}

impl<'a> GroupAffinity<'a> {
    pub fn new<O, P>(owner: &'a O, participants: &'a [P]) -> Self
    where
        O: Profile,
        P: Profile,
    {
        Self {
            owner: owner.tags().iter().map(String::as_str).collect(),
            participants: participants
                .iter()
                .map(|p| p.tags().iter().map(String::as_str).collect())
                .collect(),
            owner_weight: DEFAULT_OWNER_WEIGHT,
        }
    }

    pub fn with_owner_weight(mut self, weight: u32) -> Self {
        self.owner_weight = weight;
        self
    }
}

impl<E: Event> AffinityScorer<E> for GroupAffinity<'_> {
    fn score(&self, event: &E) -> u32 {
        let owner = shared_tags(&self.owner, event).saturating_mul(self.owner_weight);
        self.participants
            .iter()
            .map(|tags| shared_tags(tags, event))
            .fold(owner, u32::saturating_add)
    }
}
