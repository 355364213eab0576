//! Forward-only step arrival tracking.
//!
//! Matches a stream of noisy position fixes against the chosen route's
//! step sequence. The scan is forward-only and first-match: a step that
//! has been reached is never re-evaluated, so a noisy fix behind the
//! traveler can neither move the pointer backwards nor retrigger an
//! announcement, and each fix costs at most O(remaining steps).

use crate::config::TrackingConfig;
use crate::geo::GeoFix;
use crate::route::{Route, RouteStep};
use log::{debug, info};

/// Tracker state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackState {
    /// No route loaded
    Idle,
    /// Waiting for a fix to match against the remaining steps
    AwaitingFix,
    /// The last fix arrived within the arrival radius of step `i`
    StepReached(usize),
    /// Every step has been passed
    Completed,
    /// Tracking cancelled
    Stopped,
}

impl TrackState {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrackState::Completed | TrackState::Stopped)
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            TrackState::Idle => "Idle",
            TrackState::AwaitingFix => "AwaitingFix",
            TrackState::StepReached(_) => "StepReached",
            TrackState::Completed => "Completed",
            TrackState::Stopped => "Stopped",
        }
    }
}

/// Emitted when a fix lands within the arrival radius of a step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReached {
    /// Index of the reached step in the route
    pub index: usize,
    /// The reached step itself
    pub step: RouteStep,
}

/// Advances a monotonic step pointer as fixes arrive.
pub struct StepTracker {
    config: TrackingConfig,
    steps: Vec<RouteStep>,
    step_pointer: usize,
    state: TrackState,
}

impl StepTracker {
    /// Create an idle tracker
    pub fn new(config: TrackingConfig) -> Self {
        Self {
            config,
            steps: Vec::new(),
            step_pointer: 0,
            state: TrackState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> TrackState {
        self.state
    }

    /// Index of the next unreached step. Never decreases within a session
    /// and never exceeds the step count.
    pub fn step_pointer(&self) -> usize {
        self.step_pointer
    }

    /// The next maneuver to announce, if any remain
    pub fn next_step(&self) -> Option<&RouteStep> {
        self.steps.get(self.step_pointer)
    }

    /// Begin tracking a route.
    ///
    /// An empty step list is legal; tracking then runs without narrated
    /// maneuvers and completes on the first fix.
    pub fn start(&mut self, route: &Route) {
        self.steps = route.steps.clone();
        self.step_pointer = 0;
        self.state = TrackState::AwaitingFix;
        info!("tracking started: {} steps", self.steps.len());
    }

    /// Feed one position fix. Returns the reached step, if any.
    ///
    /// Fixes reporting a worse accuracy than the configured bound are
    /// silently dropped; terminal states ignore fixes entirely.
    pub fn observe_fix(&mut self, fix: GeoFix) -> Option<StepReached> {
        match self.state {
            TrackState::AwaitingFix | TrackState::StepReached(_) => {}
            _ => return None,
        }

        if fix.accuracy_m > self.config.max_fix_accuracy_m {
            debug!(
                "fix dropped: accuracy {:.0}m above {:.0}m bound",
                fix.accuracy_m, self.config.max_fix_accuracy_m
            );
            return None;
        }

        if self.step_pointer >= self.steps.len() {
            self.state = TrackState::Completed;
            return None;
        }

        for i in self.step_pointer..self.steps.len() {
            let distance = fix.point.distance_deg(&self.steps[i].location);
            if distance < self.config.proximity_threshold_deg {
                self.step_pointer = i + 1;
                let reached = StepReached {
                    index: i,
                    step: self.steps[i].clone(),
                };
                self.state = if self.step_pointer == self.steps.len() {
                    TrackState::Completed
                } else {
                    TrackState::StepReached(i)
                };
                debug!(
                    "step {} reached at {:.6} deg, pointer -> {} ({})",
                    i,
                    distance,
                    self.step_pointer,
                    self.state.name()
                );
                return Some(reached);
            }
        }

        None
    }

    /// Cancel tracking and reset the pointer.
    ///
    /// Safe from any state; repeated calls and calls before `start` are
    /// no-ops.
    pub fn stop(&mut self) {
        if matches!(self.state, TrackState::Stopped | TrackState::Idle) {
            return;
        }
        self.steps.clear();
        self.step_pointer = 0;
        self.state = TrackState::Stopped;
        info!("tracking stopped");
    }
}
