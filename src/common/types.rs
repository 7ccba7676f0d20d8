//! Common types for the Beacon event emitter.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for types usable as event names.
///
/// An event name is an opaque identifier under which listeners are grouped.
/// Any type that can key a hash map and be printed in diagnostics qualifies,
/// so callers can use a closed set (an enum) or an open set (`String`,
/// `&'static str`) without extra ceremony.
pub trait EventName: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> EventName for T {}
