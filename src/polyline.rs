//! Polyline representation for route geometries.
//!
//! Stores decoded coordinates. Encoding to a compact wire format, if any,
//! belongs to whoever draws the route.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::haversine::haversine_km;

/// A route geometry as an ordered list of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Build from GeoJSON-ordered `[lng, lat]` positions.
    pub fn from_lng_lat(positions: &[[f64; 2]]) -> Self {
        Self {
            points: positions
                .iter()
                .map(|[lng, lat]| Coordinate::new(*lat, *lng))
                .collect(),
        }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Great-circle length along the points, in kilometers.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine_km(pair[0], pair[1]))
            .sum()
    }
}
