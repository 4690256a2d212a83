//! Builders for test events and profiles with sensible defaults.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use itinerary_planner::traits::{Event, Profile};
use itinerary_planner::Coordinate;

#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct TestId(pub String);

impl TestId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// 2025-06-14 at `hour:minute` UTC.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 14, hour, minute, 0).unwrap()
}

pub fn hours(h: i64) -> TimeDelta {
    TimeDelta::hours(h)
}

pub fn minutes(m: i64) -> TimeDelta {
    TimeDelta::minutes(m)
}

#[derive(Clone, Debug)]
pub struct TestEvent {
    pub id: TestId,
    pub location: Coordinate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl TestEvent {
    /// Open 09:00-21:00 at the origin, no tags.
    pub fn new(id: &str) -> Self {
        Self {
            id: TestId::new(id),
            location: Coordinate::new(0.0, 0.0),
            start: at(9, 0),
            end: at(21, 0),
            tags: Vec::new(),
        }
    }

    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Coordinate::new(lat, lng);
        self
    }

    pub fn runs(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
}

impl Event for TestEvent {
    type Id = TestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Coordinate {
        self.location
    }

    fn starts_at(&self) -> DateTime<Utc> {
        self.start
    }

    fn ends_at(&self) -> DateTime<Utc> {
        self.end
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Clone, Debug)]
pub struct TestProfile {
    pub location: Coordinate,
    pub tags: Vec<String>,
}

impl TestProfile {
    /// At the origin with no preferences.
    pub fn new() -> Self {
        Self {
            location: Coordinate::new(0.0, 0.0),
            tags: Vec::new(),
        }
    }

    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Coordinate::new(lat, lng);
        self
    }

    pub fn likes(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
}

impl Profile for TestProfile {
    fn location(&self) -> Coordinate {
        self.location
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

pub fn ids(event_ids: &[TestId]) -> Vec<&str> {
    event_ids.iter().map(|id| id.0.as_str()).collect()
}
