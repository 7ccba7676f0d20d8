//! Listener definitions for the Beacon event emitter.
//!
//! This module defines the listener and callback types used by the
//! publish-subscribe mechanism.

use crate::utils::error::Result;
use std::sync::Arc;
use uuid::Uuid;

/// Type alias for listener callback functions.
///
/// A callback receives a borrowed payload and returns a [`Result`] so the
/// emitter can record failures without aborting the dispatch. Callbacks with
/// nothing to report simply return `Ok(())`.
pub type ListenerCallback<P> = Arc<dyn Fn(&P) -> Result<()>>;

/// A registered listener: a callback plus a unique id.
///
/// Listener identity follows the callback handle, not the callback's
/// behavior: two separately created callbacks with identical bodies are
/// distinct listeners, and unsubscribing one never removes the other.
pub struct Listener<P> {
    /// Unique id of the listener, assigned at construction.
    pub id: Uuid,
    /// Callback function to execute when a payload is published.
    pub callback: ListenerCallback<P>,
}

impl<P> Clone for Listener<P> {
    fn clone(&self) -> Self {
        Listener {
            id: self.id,
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<P> Listener<P> {
    /// Create a new listener wrapping the given callback.
    pub fn new(callback: ListenerCallback<P>) -> Self {
        Listener {
            id: Uuid::new_v4(),
            callback,
        }
    }

    /// Check whether this listener wraps the exact callback handle given.
    ///
    /// Comparison is `Arc` pointer identity, never structural equality.
    pub fn wraps(&self, callback: &ListenerCallback<P>) -> bool {
        Arc::ptr_eq(&self.callback, callback)
    }

    /// Invoke the callback with the given payload.
    pub fn invoke(&self, payload: &P) -> Result<()> {
        (self.callback)(payload)
    }
}
