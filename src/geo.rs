//! Geographic value types.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, valid range [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180]
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new coordinate
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether the coordinate lies in the valid WGS84 range
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Planar Euclidean distance in degrees.
    ///
    /// Treats lat/lng as a flat plane, so the same degree distance covers
    /// less ground east-west at high latitudes. Adequate for step-arrival
    /// checks at city scale; not a geodesic.
    #[inline]
    pub fn distance_deg(&self, other: &GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

/// One reported position sample with its accuracy estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoFix {
    /// Reported position
    pub point: GeoPoint,
    /// Estimated horizontal error radius in meters
    pub accuracy_m: f64,
}

impl GeoFix {
    /// Create a new fix
    #[inline]
    pub fn new(lat: f64, lng: f64, accuracy_m: f64) -> Self {
        Self {
            point: GeoPoint::new(lat, lng),
            accuracy_m,
        }
    }
}
