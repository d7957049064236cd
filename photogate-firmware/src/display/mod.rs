//! Display and settings sinks for the controller
//!
//! The controller calls these synchronously from the poll loop; both only
//! post to a signal and return.

pub mod adapter;

pub use adapter::{SignalDisplay, SignalSettingsStore};
