//! Wire schema of the safe-route backend.
//!
//! Field names follow the backend's JSON exactly so responses deserialize
//! without adapters; [`SafeRouteResponse::into_routes`] validates and
//! converts into core types. Transport is left to the caller.

use crate::error::{NavError, Result};
use crate::geo::GeoPoint;
use crate::route::{Route, RouteStep};
use serde::{Deserialize, Serialize};

/// Request body for a safe-route query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SafeRouteRequest {
    pub source_lat: f64,
    pub source_lng: f64,
    pub dest_lat: f64,
    pub dest_lng: f64,
}

impl SafeRouteRequest {
    /// Build a request from source and destination coordinates
    pub fn new(source: GeoPoint, dest: GeoPoint) -> Self {
        Self {
            source_lat: source.lat,
            source_lng: source.lng,
            dest_lat: dest.lat,
            dest_lng: dest.lng,
        }
    }
}

/// Response body of a safe-route query.
#[derive(Clone, Debug, Deserialize)]
pub struct SafeRouteResponse {
    pub routes: Vec<WireRoute>,
}

/// One route as serialized by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct WireRoute {
    /// Position in the backend's safest-first ordering
    #[serde(default)]
    pub id: u32,
    /// Danger percentage (0-100)
    pub danger: f64,
    pub distance: String,
    pub duration: String,
    /// Polyline as [lat, lng] pairs
    pub coordinates: Vec<[f64; 2]>,
    #[serde(default)]
    pub steps: Vec<WireStep>,
}

/// One maneuver step as serialized by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct WireStep {
    pub instruction: String,
    pub distance: String,
    pub location: WireLatLng,
}

/// Coordinate object as serialized by the backend.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct WireLatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Transport-agnostic routing collaborator.
///
/// Implement this over HTTP, a local model, a fixture file - the core only
/// cares that a request yields validated routes.
pub trait SafeRouteSource {
    /// Fetch candidate routes between two points
    fn safe_routes(&mut self, request: &SafeRouteRequest) -> Result<Vec<Route>>;
}

impl SafeRouteResponse {
    /// Parse a JSON response body
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Validate and convert every route into core types
    pub fn into_routes(self) -> Result<Vec<Route>> {
        self.routes.into_iter().map(WireRoute::into_route).collect()
    }
}

impl WireRoute {
    /// Validate and convert one route.
    fn into_route(self) -> Result<Route> {
        if self.coordinates.len() < 2 {
            return Err(NavError::Wire(format!(
                "route {}: polyline has {} points, need at least 2",
                self.id,
                self.coordinates.len()
            )));
        }
        if !(self.danger >= 0.0) {
            return Err(NavError::Wire(format!(
                "route {}: danger score {} is not a non-negative number",
                self.id, self.danger
            )));
        }

        let mut coordinates = Vec::with_capacity(self.coordinates.len());
        for [lat, lng] in self.coordinates {
            let point = GeoPoint::new(lat, lng);
            if !point.is_valid() {
                return Err(NavError::Wire(format!(
                    "route {}: coordinate ({}, {}) outside WGS84 range",
                    self.id, lat, lng
                )));
            }
            coordinates.push(point);
        }

        let steps = self
            .steps
            .into_iter()
            .map(|s| RouteStep {
                location: GeoPoint::new(s.location.lat, s.location.lng),
                instruction_markup: s.instruction,
                distance_text: s.distance,
            })
            .collect();

        Ok(Route {
            coordinates,
            steps,
            danger_score: self.danger,
            distance_text: self.distance,
            duration_text: self.duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "routes": [
            {
                "id": 0,
                "danger": 12.4,
                "distance": "4.1 km",
                "duration": "14 mins",
                "coordinates": [[18.5204, 73.8567], [18.5210, 73.8579]],
                "steps": [
                    {
                        "instruction": "Head <b>north</b> on FC Road",
                        "distance": "250 m",
                        "location": {"lat": 18.5210, "lng": 73.8579}
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_backend_response() {
        let routes = SafeRouteResponse::from_json(BODY).unwrap().into_routes().unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].danger_score, 12.4);
        assert_eq!(routes[0].coordinates.len(), 2);
        assert_eq!(routes[0].steps.len(), 1);
        assert_eq!(routes[0].steps[0].distance_text, "250 m");
        assert!((routes[0].steps[0].location.lat - 18.5210).abs() < 1e-9);
    }

    #[test]
    fn test_request_serialization() {
        let req = SafeRouteRequest::new(
            GeoPoint::new(18.5204, 73.8567),
            GeoPoint::new(18.5310, 73.8440),
        );
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"source_lat\":18.5204"));
        assert!(json.contains("\"dest_lng\":73.844"));
    }

    #[test]
    fn test_short_polyline_rejected() {
        let body = r#"{"routes": [{"danger": 1.0, "distance": "", "duration": "",
            "coordinates": [[18.5, 73.8]], "steps": []}]}"#;
        let err = SafeRouteResponse::from_json(body)
            .unwrap()
            .into_routes()
            .unwrap_err();
        assert!(matches!(err, NavError::Wire(_)));
    }

    #[test]
    fn test_out_of_range_coordinate_rejected() {
        let body = r#"{"routes": [{"danger": 1.0, "distance": "", "duration": "",
            "coordinates": [[95.0, 73.8], [18.5, 73.8]], "steps": []}]}"#;
        let err = SafeRouteResponse::from_json(body)
            .unwrap()
            .into_routes()
            .unwrap_err();
        assert!(matches!(err, NavError::Wire(_)));
    }

    #[test]
    fn test_negative_danger_rejected() {
        let body = r#"{"routes": [{"danger": -0.5, "distance": "", "duration": "",
            "coordinates": [[18.5, 73.8], [18.6, 73.9]], "steps": []}]}"#;
        let err = SafeRouteResponse::from_json(body)
            .unwrap()
            .into_routes()
            .unwrap_err();
        assert!(matches!(err, NavError::Wire(_)));
    }
}
