//! Position fix stream abstraction.
//!
//! Decouples the tracker from any platform location API: a [`FixStream`]
//! hands out a cancellable [`FixSubscription`], and the session pulls
//! pending events from it one at a time. [`ChannelFixStream`] is the
//! in-crate implementation used by tests and simulations.

use crate::geo::GeoFix;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fmt;

/// Why a fix stream stopped delivering positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixStreamError {
    /// The user or platform denied location access
    PermissionDenied,
    /// No fix arrived within the platform's time limit
    Timeout,
    /// The platform cannot determine a position
    PositionUnavailable,
}

impl fmt::Display for FixStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixStreamError::PermissionDenied => write!(f, "permission denied"),
            FixStreamError::Timeout => write!(f, "timed out"),
            FixStreamError::PositionUnavailable => write!(f, "position unavailable"),
        }
    }
}

/// Event delivered by a fix stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FixEvent {
    /// A position sample
    Fix(GeoFix),
    /// The stream failed; no further fixes should be expected
    Error(FixStreamError),
}

/// A cancellable source of position fixes.
pub trait FixStream {
    /// Begin delivery. The returned subscription yields events until it is
    /// unsubscribed or the source ends.
    fn subscribe(&mut self) -> crate::error::Result<FixSubscription>;
}

/// Handle to an active fix subscription.
///
/// Dropping the handle disconnects from the source; no event is observable
/// after that, so cancellation needs no further protocol.
#[derive(Debug)]
pub struct FixSubscription {
    events: Receiver<FixEvent>,
}

impl FixSubscription {
    /// Wrap a channel receiver as a subscription
    pub fn new(events: Receiver<FixEvent>) -> Self {
        Self { events }
    }

    /// Next pending event, if any. Never blocks.
    pub fn try_next(&self) -> Option<FixEvent> {
        self.events.try_recv().ok()
    }

    /// Release the subscription
    pub fn unsubscribe(self) {}
}

/// Channel-backed fix stream.
///
/// The producing side pushes through a [`FixInjector`]; each subscriber
/// pulls from its own handle. Mirrors how simulated devices feed the rest
/// of the pipeline in tests.
#[derive(Debug)]
pub struct ChannelFixStream {
    tx: Sender<FixEvent>,
    rx: Receiver<FixEvent>,
}

impl ChannelFixStream {
    /// Create an unbounded stream
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Handle for pushing events from the producing side
    pub fn injector(&self) -> FixInjector {
        FixInjector {
            tx: self.tx.clone(),
        }
    }
}

impl Default for ChannelFixStream {
    fn default() -> Self {
        Self::new()
    }
}

impl FixStream for ChannelFixStream {
    fn subscribe(&mut self) -> crate::error::Result<FixSubscription> {
        Ok(FixSubscription::new(self.rx.clone()))
    }
}

/// Producing-side handle of a [`ChannelFixStream`].
#[derive(Clone, Debug)]
pub struct FixInjector {
    tx: Sender<FixEvent>,
}

impl FixInjector {
    /// Push one position sample
    pub fn push_fix(&self, lat: f64, lng: f64, accuracy_m: f64) {
        let _ = self.tx.send(FixEvent::Fix(GeoFix::new(lat, lng, accuracy_m)));
    }

    /// Push a stream failure
    pub fn push_error(&self, error: FixStreamError) {
        let _ = self.tx.send(FixEvent::Error(error));
    }
}
