//! Great-circle distance helpers

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for all distance calculations, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A (latitude, longitude) pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine distance to `other` in kilometers, rounded to the nearest meter
    pub fn distance_to(&self, other: &Location) -> f64 {
        calculate_distance(self.lat, self.lon, other.lat, other.lon)
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// Round to 3 decimal places (meters when the value is in kilometers)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Distance in kilometers between (lat1, lon1) and (lat2, lon2), rounded to 3 decimals
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );

    let haversine = ((lat2 - lat1) / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * ((lon2 - lon1) / 2.0).sin().powi(2);

    round3(2.0 * EARTH_RADIUS_KM * haversine.sqrt().asin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    #[test]
    fn test_calculate_distance_short_hop() {
        let d = calculate_distance(43.659777, -79.397383, 43.657129, -79.399439);
        assert!((d - 0.338).abs() < EPSILON, "got {d}");
    }

    #[test]
    fn test_calculate_distance_long_haul() {
        let d = calculate_distance(43.42, -79.24, 53.32, -113.30);
        assert!((d - 2713.226).abs() < EPSILON, "got {d}");
    }

    #[test]
    fn test_distance_symmetric_and_zero() {
        let a = Location::new(43.167233, -80.275567);
        let b = Location::new(45.036739, -81.33579);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(0.0004), 0.0);
        assert_eq!(round3(12.0), 12.0);
    }
}
