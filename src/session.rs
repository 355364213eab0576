//! Navigation session lifecycle and orchestration.

use crate::config::NavConfig;
use crate::error::{NavError, Result};
use crate::geo::GeoFix;
use crate::narration::{NarrationDispatcher, Narrator};
use crate::render::{DrawId, MapSurface, MarkerKind, RenderCoordinator};
use crate::route::RouteCandidateSet;
use crate::stream::{FixEvent, FixStream, FixSubscription};
use crate::tracker::{StepTracker, TrackState};
use log::{debug, info, warn};

/// State of one live tracking session.
struct LiveSession {
    subscription: FixSubscription,
    marker_placed: bool,
    last_announced_step: Option<usize>,
}

/// Orchestrates route selection, rendering, fix tracking and narration.
///
/// The controller exclusively owns all session state - selection, step
/// pointer, subscription, markers. It runs at most one live session;
/// starting a new one tears the previous one down first, so two fix
/// subscriptions can never race the same step pointer.
///
/// Fix delivery is cooperative: collaborators push events into the
/// subscription and [`pump`](Self::pump) drains them, processing each fix
/// to completion before looking at the next.
pub struct NavigationController<M, N> {
    config: NavConfig,
    map: M,
    narration: NarrationDispatcher<N>,
    renderer: RenderCoordinator,
    tracker: StepTracker,
    /// Polylines currently on the map, cleared before every redraw
    drawn: Vec<DrawId>,
    selected: Option<usize>,
    live: Option<LiveSession>,
}

impl<M: MapSurface, N: Narrator> NavigationController<M, N> {
    /// Create a controller around its map and speech collaborators
    pub fn new(config: NavConfig, map: M, voice: N) -> Self {
        let renderer = RenderCoordinator::new(config.render.clone());
        let tracker = StepTracker::new(config.tracking.clone());
        Self {
            config,
            map,
            narration: NarrationDispatcher::new(voice),
            renderer,
            tracker,
            drawn: Vec::new(),
            selected: None,
            live: None,
        }
    }

    /// Current tracker state
    pub fn track_state(&self) -> TrackState {
        self.tracker.state()
    }

    /// Index of the currently highlighted route, if any
    pub fn selected_route(&self) -> Option<usize> {
        self.selected
    }

    /// Whether a live session is running
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Index of the last step announced in the live session
    pub fn last_announced_step(&self) -> Option<usize> {
        self.live.as_ref().and_then(|l| l.last_announced_step)
    }

    /// Index of the next unreached step
    pub fn step_pointer(&self) -> usize {
        self.tracker.step_pointer()
    }

    /// The next maneuver of the tracked route, if any remain
    pub fn next_step(&self) -> Option<&crate::route::RouteStep> {
        self.tracker.next_step()
    }

    /// The map collaborator
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Present a fresh candidate set with no selection.
    ///
    /// Stops any live session, redraws every route in its tier color and
    /// marks the first route's endpoints as source and destination.
    pub fn show_candidates(&mut self, set: &RouteCandidateSet) {
        self.stop();
        self.selected = None;
        self.redraw(set, None);

        if let Some(first) = set.routes().first() {
            if let (Some(&source), Some(&dest)) =
                (first.coordinates.first(), first.coordinates.last())
            {
                self.map.place_marker(MarkerKind::Source, source);
                self.map.place_marker(MarkerKind::Destination, dest);
            }
        }
        info!("presented {} candidate routes", set.len());
    }

    /// Highlight one candidate. Does not start live tracking.
    ///
    /// Fails with [`NavError::IndexOutOfRange`] when `index` is not a
    /// valid position in the set.
    pub fn select_route(&mut self, set: &RouteCandidateSet, index: usize) -> Result<()> {
        if index >= set.len() {
            return Err(NavError::IndexOutOfRange {
                index,
                len: set.len(),
            });
        }
        self.selected = Some(index);
        self.redraw(set, Some(index));
        debug!("route {} selected", index);
        Ok(())
    }

    /// Select a route and begin live tracking of it.
    ///
    /// A session already running is stopped first. Subscription failures
    /// surface synchronously; later stream errors arrive through
    /// [`pump`](Self::pump).
    pub fn start<S: FixStream>(
        &mut self,
        set: &RouteCandidateSet,
        index: usize,
        source: &mut S,
    ) -> Result<()> {
        if self.live.is_some() {
            warn!("starting a new session over a live one; stopping the old session");
            self.stop();
        }
        self.select_route(set, index)?;

        let route = &set.routes()[index];
        self.tracker.start(route);

        let subscription = source.subscribe()?;
        self.live = Some(LiveSession {
            subscription,
            marker_placed: false,
            last_announced_step: None,
        });
        info!(
            "navigation started on route {} ({} steps)",
            index,
            route.steps.len()
        );
        Ok(())
    }

    /// Drain pending fix events, processing each to completion.
    ///
    /// On a stream error the session is torn down and the error returned
    /// as [`NavError::LocationUnavailable`]; retrying is a fresh `start`.
    /// A no-op when no session is live.
    pub fn pump(&mut self) -> Result<()> {
        loop {
            let event = match &self.live {
                Some(live) => live.subscription.try_next(),
                None => return Ok(()),
            };
            match event {
                None => return Ok(()),
                Some(FixEvent::Fix(fix)) => self.process_fix(fix),
                Some(FixEvent::Error(reason)) => {
                    warn!("fix stream failed: {}", reason);
                    self.stop();
                    return Err(NavError::LocationUnavailable(reason));
                }
            }
        }
    }

    /// Tear down the live session.
    ///
    /// Releases the subscription, removes the live-position marker and
    /// resets the tracker. Safe to call repeatedly.
    pub fn stop(&mut self) {
        let Some(live) = self.live.take() else {
            return;
        };
        live.subscription.unsubscribe();
        if live.marker_placed {
            self.map.remove_marker(MarkerKind::LivePosition);
        }
        self.tracker.stop();
        info!("navigation stopped");
    }

    fn process_fix(&mut self, fix: GeoFix) {
        if !fix.point.is_valid() {
            debug!("fix dropped: coordinate out of WGS84 range");
            return;
        }

        if let Some(live) = self.live.as_mut() {
            self.map.place_marker(MarkerKind::LivePosition, fix.point);
            live.marker_placed = true;
        }
        if self.config.tracking.follow_fixes {
            self.map.center_on(fix.point);
        }

        if let Some(reached) = self.tracker.observe_fix(fix) {
            if let Some(live) = self.live.as_mut() {
                live.last_announced_step = Some(reached.index);
            }
            self.narration.announce(&reached.step);
        }
    }

    fn redraw(&mut self, set: &RouteCandidateSet, selected: Option<usize>) {
        for cmd in self.renderer.clear(&self.drawn) {
            self.map.undraw(&cmd);
        }
        self.drawn.clear();

        let cmds = self.renderer.render_all(set, selected);
        for cmd in &cmds {
            self.map.draw(cmd);
        }
        self.drawn = cmds.iter().map(|c| c.id).collect();
    }
}
