//! Configuration types
//!
//! Timing configuration parsed from the embedded TOML, and the settings
//! record persisted to flash as postcard binary data.

pub mod settings;
pub mod toml;
pub mod types;

pub use settings::*;
pub use toml::{parse_config, ParseError};
pub use types::*;
