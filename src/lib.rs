//! Beacon: a minimal typed in-process publish/subscribe event emitter.
//!
//! An [`Emitter`] owns a registry mapping event names to ordered lists of
//! listeners. Callers register callbacks with [`Emitter::subscribe`], remove
//! them with [`Emitter::unsubscribe`], and deliver a payload synchronously to
//! every registered listener with [`Emitter::publish`]. Delivery happens in
//! registration order, on the caller's own thread, with no queueing or
//! deferral of any kind.
//!
//! Event names and payloads are both type parameters, so agreement between
//! publishers and subscribers is enforced at compile time: an
//! `Emitter<UserEvent, UserData>` only accepts `UserEvent` names and
//! `UserData` payloads. Any `Clone + Eq + Hash + Debug` type works as an
//! event name, including enums and strings.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use beacon::{Emitter, ListenerCallback};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum UserEvent {
//!     Signup,
//!     Update,
//! }
//!
//! struct UserData {
//!     name: String,
//!     age: u32,
//! }
//!
//! let emitter: Emitter<UserEvent, UserData> = Emitter::new();
//!
//! let greet: ListenerCallback<UserData> = Arc::new(|data: &UserData| {
//!     println!("User signed up: {}, Age: {}", data.name, data.age);
//!     Ok(())
//! });
//! emitter.subscribe(UserEvent::Signup, greet.clone());
//!
//! let alice = UserData { name: "Alice".into(), age: 30 };
//! emitter.publish(&UserEvent::Signup, &alice).unwrap();
//!
//! emitter.unsubscribe(&UserEvent::Signup, &greet);
//! // No listeners remain; publishing is a silent no-op.
//! let bob = UserData { name: "Bob".into(), age: 25 };
//! emitter.publish(&UserEvent::Signup, &bob).unwrap();
//! ```
//!
//! # Failure policy
//!
//! Callbacks return a [`Result`]. A failing listener never prevents the
//! remaining listeners from running: `publish` records each failure,
//! continues, and returns an aggregate [`EmitterError::Publish`] after all
//! listeners have been attempted.
//!
//! # Concurrency
//!
//! The emitter is single-threaded by design. The registry lives behind a
//! `RefCell`, so the type is `!Sync`; sharing one across threads requires
//! external synchronization that this crate deliberately does not provide.

pub mod common;
pub mod emitter;
pub mod utils;

pub use common::types::EventName;
pub use emitter::Emitter;
pub use emitter::Listener;
pub use emitter::ListenerCallback;
pub use utils::error::EmitterError;
pub use utils::error::ListenerFailure;
pub use utils::error::Result;
