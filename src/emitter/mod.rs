//! Event emitter module for Beacon.
//!
//! This module implements an in-memory publish-subscribe mechanism: listeners
//! register under an event name and receive every payload subsequently
//! published under that name, synchronously and in registration order.

pub mod emitter;
pub mod listener;

pub use emitter::Emitter;
pub use listener::Listener;
pub use listener::ListenerCallback;
