//! Location and heading snapshot service
//!
//! Replaces an implicit shared-singleton location feed with an explicit
//! service object: the platform glue pushes fixes and headings in, and
//! consumers either register a callback or poll a channel. Updates are stored
//! and handed out as whole-value snapshots so no reader can observe a
//! half-updated coordinate/heading pair. The geodetic solver and transform
//! builder never touch this module; they receive snapshots by value through
//! their arguments.

use crate::core::types::{GeoCoordinate, GeoPoint};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::{Mutex, PoisonError};

/// Events emitted on every accepted update
#[derive(Debug, Clone)]
pub enum LocationEvent {
    /// A new location fix arrived
    LocationUpdated { snapshot: LocationSnapshot },
    /// A new heading arrived
    HeadingUpdated { snapshot: LocationSnapshot },
    /// The platform feed reported a failure
    TrackingFailed { reason: String },
}

/// Atomic by-value snapshot of the latest fix and heading
///
/// Fields are `None` until the first corresponding update arrives; the
/// `*_or_default` accessors apply the documented startup policy of 0.0 and
/// (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationSnapshot {
    pub point: Option<GeoPoint>,
    pub heading_deg: Option<f64>,
}

impl LocationSnapshot {
    /// Latest coordinate, or (0, 0) before the first fix
    pub fn coordinate_or_default(&self) -> GeoCoordinate {
        self.point.map(|point| point.coordinate).unwrap_or(GeoCoordinate {
            latitude: 0.0,
            longitude: 0.0,
        })
    }

    /// Latest altitude, or 0.0 before the first fix carrying one
    pub fn altitude_or_default(&self) -> f64 {
        self.point.and_then(|point| point.altitude_m).unwrap_or(0.0)
    }

    /// Latest heading, or 0.0 before the first heading update
    pub fn heading_or_default(&self) -> f64 {
        self.heading_deg.unwrap_or(0.0)
    }
}

/// Handle returned by `subscribe`, used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u32);

type LocationCallback = Box<dyn Fn(&LocationEvent) + Send>;

struct ServiceState {
    running: bool,
    snapshot: LocationSnapshot,
    callbacks: HashMap<SubscriptionHandle, LocationCallback>,
    senders: Vec<mpsc::Sender<LocationEvent>>,
    next_handle: u32,
}

/// Explicit-lifecycle location service
///
/// All state lives behind one mutex so the service can be shared across
/// threads (e.g. in an `Arc`): the platform feed publishes from its thread
/// while the render loop polls `snapshot()` or a channel. Callbacks run
/// synchronously on the publishing thread and must not call back into the
/// service.
pub struct LocationService {
    state: Mutex<ServiceState>,
}

impl Default for LocationService {
    fn default() -> Self {
        Self {
            state: Mutex::new(ServiceState {
                running: false,
                snapshot: LocationSnapshot::default(),
                callbacks: HashMap::new(),
                senders: Vec::new(),
                next_handle: 0,
            }),
        }
    }
}

impl LocationService {
    /// Create a stopped service with an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin accepting updates
    pub fn start(&self) {
        self.locked().running = true;
    }

    /// Stop accepting updates; the last snapshot remains readable
    pub fn stop(&self) {
        self.locked().running = false;
    }

    pub fn is_running(&self) -> bool {
        self.locked().running
    }

    /// Publish a location fix from the platform feed
    ///
    /// Returns `false` (update dropped) while the service is stopped.
    pub fn publish_location(&self, point: GeoPoint) -> bool {
        let mut state = self.locked();
        if !state.running {
            return false;
        }
        state.snapshot.point = Some(point);
        let event = LocationEvent::LocationUpdated {
            snapshot: state.snapshot,
        };
        Self::dispatch(&mut state, event);
        true
    }

    /// Publish a heading update from the platform feed
    ///
    /// Returns `false` (update dropped) while the service is stopped.
    pub fn publish_heading(&self, heading_deg: f64) -> bool {
        let mut state = self.locked();
        if !state.running {
            return false;
        }
        state.snapshot.heading_deg = Some(heading_deg);
        let event = LocationEvent::HeadingUpdated {
            snapshot: state.snapshot,
        };
        Self::dispatch(&mut state, event);
        true
    }

    /// Publish a tracking failure; the snapshot is left untouched
    pub fn publish_failure(&self, reason: impl Into<String>) -> bool {
        let mut state = self.locked();
        if !state.running {
            return false;
        }
        let event = LocationEvent::TrackingFailed {
            reason: reason.into(),
        };
        Self::dispatch(&mut state, event);
        true
    }

    /// Current snapshot, by value
    pub fn snapshot(&self) -> LocationSnapshot {
        self.locked().snapshot
    }

    /// Register a callback invoked on every accepted update
    pub fn subscribe(
        &self,
        callback: impl Fn(&LocationEvent) + Send + 'static,
    ) -> SubscriptionHandle {
        let mut state = self.locked();
        state.next_handle += 1;
        let handle = SubscriptionHandle(state.next_handle);
        state.callbacks.insert(handle, Box::new(callback));
        handle
    }

    /// Remove a callback; returns whether the handle was registered
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        self.locked().callbacks.remove(&handle).is_some()
    }

    /// Open a channel that receives every accepted update
    ///
    /// Dropping the receiver detaches it on the next publish.
    pub fn channel(&self) -> mpsc::Receiver<LocationEvent> {
        let (sender, receiver) = mpsc::channel();
        self.locked().senders.push(sender);
        receiver
    }

    fn dispatch(state: &mut ServiceState, event: LocationEvent) {
        state
            .senders
            .retain(|sender| sender.send(event.clone()).is_ok());
        for callback in state.callbacks.values() {
            callback(&event);
        }
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, ServiceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
