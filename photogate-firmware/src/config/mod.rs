//! Configuration loading and unit persistence
//!
//! Timing configuration comes from the embedded speedometer.toml; the
//! selected unit lives in flash.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::{load_unit, save_unit};
