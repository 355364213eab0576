//! Candidate routes and danger tier classification.

use crate::error::{NavError, Result};
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// One maneuver of a route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Where the maneuver completes
    pub location: GeoPoint,
    /// Instruction text as delivered by the routing backend; may contain
    /// inline markup, which narration strips before speaking.
    pub instruction_markup: String,
    /// Human-readable step distance ("350 m")
    pub distance_text: String,
}

/// A candidate path with its externally computed danger score.
///
/// Immutable once received from the routing collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Path polyline, at least two points
    pub coordinates: Vec<GeoPoint>,
    /// Maneuver steps; may be empty
    pub steps: Vec<RouteStep>,
    /// Risk metric from the routing backend; lower is safer
    pub danger_score: f64,
    /// Human-readable total distance
    pub distance_text: String,
    /// Human-readable total duration
    pub duration_text: String,
}

/// Relative risk of a route within its candidate set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DangerTier {
    /// Safest route of the set
    Min,
    /// Neither safest nor riskiest
    Mid,
    /// Riskiest route of the set
    Max,
}

/// Immutable, non-empty set of ranked candidate routes.
///
/// The tier table is computed once at construction and replaced wholesale
/// with the set. It is never patched in place, so a replaced set cannot
/// carry stale classification.
#[derive(Clone, Debug)]
pub struct RouteCandidateSet {
    routes: Vec<Route>,
    tiers: Vec<DangerTier>,
}

impl RouteCandidateSet {
    /// Build a set from routes in caller order.
    ///
    /// Fails with [`NavError::EmptyCandidateSet`] when `routes` is empty.
    pub fn load(routes: Vec<Route>) -> Result<Self> {
        if routes.is_empty() {
            return Err(NavError::EmptyCandidateSet);
        }
        let tiers = classify(&routes);
        Ok(Self { routes, tiers })
    }

    /// Build a set ordered safest-first, the order the backend serves.
    pub fn load_sorted(mut routes: Vec<Route>) -> Result<Self> {
        routes.sort_by(|a, b| a.danger_score.total_cmp(&b.danger_score));
        Self::load(routes)
    }

    /// Number of candidates (always at least 1)
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Never true for a loaded set; present to pair with `len`
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    /// All candidates in set order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Danger tier of the route at `index`
    pub fn tier(&self, index: usize) -> Option<DangerTier> {
        self.tiers.get(index).copied()
    }

    /// Iterate candidates with their tiers
    pub fn iter(&self) -> impl Iterator<Item = (&Route, DangerTier)> {
        self.routes.iter().zip(self.tiers.iter().copied())
    }
}

/// Compute the tier table for a non-empty route slice.
///
/// Strict comparisons mean the first occurrence wins ties for both the
/// safest and the riskiest slot. A single-route set classifies as Min.
fn classify(routes: &[Route]) -> Vec<DangerTier> {
    let mut min_i = 0;
    let mut max_i = 0;
    for (i, route) in routes.iter().enumerate().skip(1) {
        if route.danger_score < routes[min_i].danger_score {
            min_i = i;
        }
        if route.danger_score > routes[max_i].danger_score {
            max_i = i;
        }
    }

    let mut tiers = vec![DangerTier::Mid; routes.len()];
    tiers[max_i] = DangerTier::Max;
    // Assigned after Max so a degenerate one-route set reads as safest
    tiers[min_i] = DangerTier::Min;
    tiers
}
