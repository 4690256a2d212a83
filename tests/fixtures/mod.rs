//! Test fixtures for itinerary-planner.
//!
//! Provides:
//! - Builders for events and traveler profiles
//! - Real Las Vegas venue coordinates (from OpenStreetMap)

#![allow(dead_code)]

pub mod builders;
pub mod las_vegas_venues;

pub use builders::*;
