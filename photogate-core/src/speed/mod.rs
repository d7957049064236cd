//! Velocity calculation and display units
//!
//! Speeds are always carried in meters per second; a [`SpeedUnit`] is only
//! applied when a value is rendered.

pub mod unit;
pub mod velocity;

pub use unit::{SpeedUnit, UnitCycler};
pub use velocity::{SpeedError, VelocityCalculator};
