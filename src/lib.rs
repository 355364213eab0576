//! # MargaNav: Route Selection & Live Navigation Tracking
//!
//! Core logic for picking the safest of several candidate routes and then
//! following it live: danger-tier ranking, draw-order policy for the map,
//! forward-only step matching against a stream of position fixes, and
//! spoken turn guidance.
//!
//! Route computation, map rendering, geolocation and speech synthesis are
//! external collaborators behind narrow traits ([`MapSurface`],
//! [`FixStream`], [`Narrator`], [`wire::SafeRouteSource`]); the crate
//! consumes routes and danger scores as opaque inputs and persists
//! nothing.
//!
//! ## Quick start
//!
//! ```rust
//! use marga_nav::{
//!     ChannelFixStream, DrawCommand, GeoPoint, MapSurface, MarkerKind, NavConfig,
//!     NavigationController, Narrator, Route, RouteCandidateSet, UndrawCommand,
//! };
//!
//! struct NullMap;
//! impl MapSurface for NullMap {
//!     fn draw(&mut self, _cmd: &DrawCommand) {}
//!     fn undraw(&mut self, _cmd: &UndrawCommand) {}
//!     fn place_marker(&mut self, _kind: MarkerKind, _at: GeoPoint) {}
//!     fn remove_marker(&mut self, _kind: MarkerKind) {}
//! }
//!
//! struct Silent;
//! impl Narrator for Silent {
//!     fn speak(&mut self, _text: &str) {}
//! }
//!
//! let set = RouteCandidateSet::load(vec![Route {
//!     coordinates: vec![GeoPoint::new(18.5204, 73.8567), GeoPoint::new(18.5310, 73.8440)],
//!     steps: Vec::new(),
//!     danger_score: 7.5,
//!     distance_text: "2.3 km".into(),
//!     duration_text: "9 mins".into(),
//! }])
//! .unwrap();
//!
//! let mut controller = NavigationController::new(NavConfig::default(), NullMap, Silent);
//! controller.show_candidates(&set);
//!
//! let mut gps = ChannelFixStream::new();
//! let injector = gps.injector();
//! controller.start(&set, 0, &mut gps).unwrap();
//!
//! injector.push_fix(18.5206, 73.8565, 12.0);
//! controller.pump().unwrap();
//! controller.stop();
//! ```

pub mod config;
pub mod error;
pub mod geo;
pub mod narration;
pub mod render;
pub mod route;
pub mod session;
pub mod stream;
pub mod tracker;
pub mod wire;

// Re-export commonly used types
pub use config::{NavConfig, RenderConfig, TrackingConfig};
pub use error::{NavError, Result};
pub use geo::{GeoFix, GeoPoint};
pub use narration::{NarrationDispatcher, Narrator};
pub use render::{
    DrawCommand, DrawId, MapSurface, MarkerKind, RenderCoordinator, StrokeColor, UndrawCommand,
};
pub use route::{DangerTier, Route, RouteCandidateSet, RouteStep};
pub use session::NavigationController;
pub use stream::{
    ChannelFixStream, FixEvent, FixInjector, FixStream, FixStreamError, FixSubscription,
};
pub use tracker::{StepReached, StepTracker, TrackState};
