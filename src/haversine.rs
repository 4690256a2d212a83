//! Haversine travel-time estimator.
//!
//! Uses great-circle distance and a constant speed to estimate travel time.
//! Ignores roads and traffic, but is pure and always available.

use chrono::TimeDelta;

use crate::coordinate::Coordinate;
use crate::traits::TravelTimeEstimator;

/// Average travel speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Haversine-based travel time estimator.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    /// Assumed average travel speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineEstimator {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Convert distance in km to travel time, rounded up to whole seconds.
    ///
    /// A non-positive speed means nothing is reachable.
    fn km_to_duration(&self, km: f64) -> TimeDelta {
        if !(self.speed_kmh.is_finite() && self.speed_kmh > 0.0) {
            return TimeDelta::MAX;
        }
        let seconds = (km / self.speed_kmh * 3600.0).ceil();
        if !seconds.is_finite() || seconds >= i32::MAX as f64 {
            return TimeDelta::MAX;
        }
        TimeDelta::seconds(seconds as i64)
    }
}

impl TravelTimeEstimator for HaversineEstimator {
    fn travel_time(&self, from: Coordinate, to: Coordinate) -> TimeDelta {
        if from == to {
            return TimeDelta::zero();
        }
        self.km_to_duration(haversine_km(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let point = Coordinate::new(36.1, -115.1);
        assert!(haversine_km(point, point) < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Las Vegas to Los Angeles is ~370 km
        let dist = haversine_km(Coordinate::new(36.17, -115.14), Coordinate::new(34.05, -118.24));
        assert!(dist > 350.0 && dist < 400.0, "LV to LA should be ~370km, got {}", dist);
    }

    #[test]
    fn test_same_point_is_zero_duration() {
        let estimator = HaversineEstimator::default();
        let point = Coordinate::new(40.0, -74.0);
        assert_eq!(estimator.travel_time(point, point), TimeDelta::zero());
    }

    #[test]
    fn test_travel_time_symmetric() {
        let estimator = HaversineEstimator::default();
        let a = Coordinate::new(36.1, -115.1);
        let b = Coordinate::new(36.2, -115.3);
        assert_eq!(estimator.travel_time(a, b), estimator.travel_time(b, a));
    }

    #[test]
    fn test_reasonable_travel_time() {
        let estimator = HaversineEstimator::new(50.0);
        // 25 km at 50 km/h = 0.5 hours
        assert_eq!(estimator.km_to_duration(25.0), TimeDelta::minutes(30));
    }

    #[test]
    fn test_partial_seconds_round_up() {
        let estimator = HaversineEstimator::new(50.0);
        // 1800.0072 s must not be reported as 1800 s
        assert_eq!(estimator.km_to_duration(25.0001), TimeDelta::seconds(1801));
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        for (from, to) in [
            (Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0)),
            (Coordinate::new(45.0, -90.0), Coordinate::new(-45.0, 90.0)),
            (Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0)),
        ] {
            let dist = haversine_km(from, to);
            assert!(dist.is_finite(), "{:?} -> {:?} gave {}", from, to, dist);
            assert!((dist - half_circumference).abs() < 1.0, "got {}", dist);
        }
        let time = HaversineEstimator::default()
            .travel_time(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!(time < TimeDelta::MAX);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // One degree along a meridian is ~111.19 km, ~2h13m at 50 km/h
        let estimator = HaversineEstimator::default();
        let time = estimator.travel_time(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((8000..8020).contains(&time.num_seconds()), "got {}", time.num_seconds());
    }

    #[test]
    fn test_zero_speed_is_unreachable() {
        let estimator = HaversineEstimator::new(0.0);
        let time = estimator.travel_time(Coordinate::new(0.0, 0.0), Coordinate::new(0.1, 0.0));
        assert_eq!(time, TimeDelta::MAX);
    }
}
