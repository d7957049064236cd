//! Board-agnostic core logic for the break-beam speedometer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, settings store, clock, alarms)
//! - Edge capture shared with the interrupt side
//! - One-shot alarm bookkeeping
//! - Velocity calculation and display units
//! - State machine and the speedometer controller that drives it
//! - Configuration and persisted settings types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alarm;
pub mod config;
pub mod controller;
pub mod input;
pub mod speed;
pub mod state;
pub mod traits;
