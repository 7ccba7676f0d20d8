//! Shared type definitions used across the crate.

pub mod types;

pub use types::EventName;
