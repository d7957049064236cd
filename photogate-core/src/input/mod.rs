//! Interrupt-side input capture
//!
//! Sensor and button edges, plus alarm expiry, are recorded here by
//! whatever runs in interrupt (or edge-task) context. The poll loop
//! consumes them.

pub mod capture;
pub mod shared;

pub use capture::{EdgeCapture, Sensor};
pub use shared::SharedInputs;
