//! Draw-order and color policy for candidate routes.

use crate::config::RenderConfig;
use crate::geo::GeoPoint;
use crate::route::{DangerTier, RouteCandidateSet};

/// Stacking order for unselected candidates
pub const Z_CANDIDATE: u32 = 1;
/// Stacking order for the selected route (strictly above candidates)
pub const Z_SELECTED: u32 = 2;

/// Identifier of a drawn polyline. Equal to the route's index in the set
/// that produced it.
pub type DrawId = usize;

/// Stroke color of a drawn route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeColor {
    /// Selected route, or a middling candidate when nothing is selected
    Blue,
    /// Riskiest candidate (at-a-glance signal, no selection)
    Red,
    /// Safest candidate (at-a-glance signal, no selection)
    Green,
    /// Unselected candidate while a selection exists
    Gray,
}

impl StrokeColor {
    /// CSS color keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            StrokeColor::Blue => "blue",
            StrokeColor::Red => "red",
            StrokeColor::Green => "green",
            StrokeColor::Gray => "gray",
        }
    }
}

/// Command to draw one polyline.
#[derive(Clone, Debug)]
pub struct DrawCommand {
    pub id: DrawId,
    pub path: Vec<GeoPoint>,
    pub color: StrokeColor,
    pub weight: u32,
    pub z_order: u32,
}

/// Command to remove a previously drawn polyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndrawCommand {
    pub id: DrawId,
}

/// Marker roles on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    /// Trip origin
    Source,
    /// Trip destination
    Destination,
    /// The traveler's current position
    LivePosition,
}

/// Map collaborator: executes draw commands and marker updates.
///
/// Implementations own the actual rendering surface; the core only emits
/// ordered commands and never touches a map directly.
pub trait MapSurface {
    /// Draw one polyline
    fn draw(&mut self, cmd: &DrawCommand);

    /// Remove one polyline
    fn undraw(&mut self, cmd: &UndrawCommand);

    /// Place a marker, or move it if one of this kind already exists
    fn place_marker(&mut self, kind: MarkerKind, at: GeoPoint);

    /// Remove a marker of this kind, if present
    fn remove_marker(&mut self, kind: MarkerKind);

    /// Recenter the viewport. Default ignores it.
    fn center_on(&mut self, _at: GeoPoint) {}
}

/// Stateless draw-order and color policy.
///
/// Always clear-then-redraw: [`clear`](Self::clear) undraws everything the
/// session currently has on the map and [`render_all`](Self::render_all)
/// re-emits the full set. No incremental diffing, so a replaced candidate
/// set can never leave orphaned polylines behind.
#[derive(Clone, Debug, Default)]
pub struct RenderCoordinator {
    config: RenderConfig,
}

impl RenderCoordinator {
    /// Create a coordinator with the given drawing parameters
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Commands drawing the whole set.
    ///
    /// Non-selected routes come first in set order. With no selection they
    /// carry tier colors; with one they turn gray and the selected route is
    /// emitted last, heavier and strictly above the rest.
    pub fn render_all(&self, set: &RouteCandidateSet, selected: Option<usize>) -> Vec<DrawCommand> {
        let mut cmds = Vec::with_capacity(set.len());

        for (i, (route, tier)) in set.iter().enumerate() {
            if selected == Some(i) {
                continue;
            }
            let color = match selected {
                Some(_) => StrokeColor::Gray,
                None => match tier {
                    DangerTier::Max => StrokeColor::Red,
                    DangerTier::Min => StrokeColor::Green,
                    DangerTier::Mid => StrokeColor::Blue,
                },
            };
            cmds.push(DrawCommand {
                id: i,
                path: route.coordinates.clone(),
                color,
                weight: self.config.candidate_weight,
                z_order: Z_CANDIDATE,
            });
        }

        if let Some(i) = selected {
            if let Some(route) = set.get(i) {
                cmds.push(DrawCommand {
                    id: i,
                    path: route.coordinates.clone(),
                    color: StrokeColor::Blue,
                    weight: self.config.selected_weight,
                    z_order: Z_SELECTED,
                });
            }
        }

        cmds
    }

    /// Commands removing every currently drawn polyline
    pub fn clear(&self, drawn: &[DrawId]) -> Vec<UndrawCommand> {
        drawn.iter().map(|&id| UndrawCommand { id }).collect()
    }
}
