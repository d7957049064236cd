//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod storage;
pub mod timer;

pub use display::SpeedDisplay;
pub use storage::{SettingsStore, StoreError};
pub use timer::{AlarmTimer, Clock, TimerError};
