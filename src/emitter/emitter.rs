//! Emitter for Beacon.
//!
//! This module provides the central emitter that handles listener
//! subscription, removal, and synchronous payload dispatch.

use crate::common::types::EventName;
use crate::emitter::listener::{Listener, ListenerCallback};
use crate::utils::error::{EmitterError, ListenerFailure, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// Event emitter that handles listener subscription and payload publishing.
///
/// `E` is the event-name type and `P` the payload type every listener on this
/// emitter receives. Dispatch is synchronous and single-threaded: `publish`
/// runs each listener to completion, in registration order, on the caller's
/// thread. The registry lives behind a `RefCell`, which makes the emitter
/// `!Sync`; concurrent use requires external synchronization.
pub struct Emitter<E: EventName, P> {
    /// Map of event names to registered listeners, in registration order.
    listeners: RefCell<HashMap<E, Vec<Listener<P>>>>,
}

impl<E: EventName, P> Emitter<E, P> {
    /// Create a new emitter with an empty registry.
    pub fn new() -> Self {
        Emitter {
            listeners: RefCell::new(HashMap::new()),
        }
    }

    /// Subscribe a callback to an event name.
    ///
    /// Appends the callback to the listener sequence for `event`, creating
    /// the sequence if absent. Never fails and is not idempotent: subscribing
    /// the same callback handle twice registers it twice, and each occurrence
    /// receives its own invocation per publish.
    ///
    /// Returns the new listener's id, usable with [`unsubscribe_id`]. Callers
    /// that keep their callback handle around can ignore it and use
    /// [`unsubscribe`] instead.
    ///
    /// [`unsubscribe`]: Emitter::unsubscribe
    /// [`unsubscribe_id`]: Emitter::unsubscribe_id
    pub fn subscribe(&self, event: E, callback: ListenerCallback<P>) -> Uuid {
        let listener = Listener::new(callback);
        let listener_id = listener.id;
        log::trace!("Subscribing listener {} to {:?}", listener_id, event);

        let mut listeners = self.listeners.borrow_mut();
        listeners.entry(event).or_default().push(listener);
        listener_id
    }

    /// Unsubscribe a callback from an event name.
    ///
    /// Removes every occurrence of the exact callback handle given, matched
    /// by `Arc` pointer identity. A separately created callback with an
    /// identical body is a different handle and is left registered. If the
    /// event has no sequence or the handle is not present, this is a silent
    /// no-op.
    pub fn unsubscribe(&self, event: &E, callback: &ListenerCallback<P>) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(entries) = listeners.get_mut(event) {
            entries.retain(|listener| !listener.wraps(callback));
        }
    }

    /// Unsubscribe a listener by the id returned from [`subscribe`].
    ///
    /// Unknown ids are a silent no-op.
    ///
    /// [`subscribe`]: Emitter::subscribe
    pub fn unsubscribe_id(&self, listener_id: Uuid) {
        let mut listeners = self.listeners.borrow_mut();
        for (_, entries) in listeners.iter_mut() {
            entries.retain(|listener| listener.id != listener_id);
        }
    }

    /// Publish a payload to every listener registered for an event name.
    ///
    /// Listeners are invoked synchronously, in registration order, each
    /// receiving a reference to `payload`. An event with no listeners is a
    /// silent no-op returning `Ok(())`.
    ///
    /// The listener sequence is snapshotted before dispatch: a listener that
    /// subscribes or unsubscribes during its own invocation affects only
    /// future publishes, never the one in flight.
    ///
    /// A failing listener does not stop the dispatch. Every failure is
    /// logged and recorded, the remaining listeners still run, and the
    /// aggregate is returned as [`EmitterError::Publish`] once all listeners
    /// have been attempted.
    pub fn publish(&self, event: &E, payload: &P) -> Result<()> {
        let snapshot = match self.listeners.borrow().get(event) {
            Some(entries) => entries.clone(),
            None => return Ok(()),
        };

        log::trace!("Publishing {:?} to {} listener(s)", event, snapshot.len());

        let mut failures = Vec::new();
        for listener in &snapshot {
            if let Err(e) = listener.invoke(payload) {
                log::error!(
                    "Listener {} failed while handling {:?}: {}",
                    listener.id,
                    event,
                    e
                );
                failures.push(ListenerFailure {
                    listener_id: listener.id,
                    message: e.to_string(),
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(EmitterError::Publish {
                event: format!("{:?}", event),
                failures,
            })
        }
    }

    /// Get the number of listeners registered for a specific event name.
    pub fn listener_count(&self, event: &E) -> usize {
        let listeners = self.listeners.borrow();
        listeners.get(event).map_or(0, |entries| entries.len())
    }

    /// Get the total number of listeners across all event names.
    pub fn total_listener_count(&self) -> usize {
        let listeners = self.listeners.borrow();
        listeners.values().map(|entries| entries.len()).sum()
    }
}

impl<E: EventName, P> Default for Emitter<E, P> {
    fn default() -> Self {
        Self::new()
    }
}
