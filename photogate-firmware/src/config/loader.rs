//! Embedded configuration

use defmt::*;

use photogate_core::config::{parse_config, SpeedometerConfig};

/// Embedded configuration (compiled into firmware)
/// Edit speedometer.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../speedometer.toml");

/// Parse the embedded configuration
///
/// build.rs rejects a malformed file, so the fallback only triggers if the
/// host validator and the firmware parser disagree.
pub fn load_config() -> SpeedometerConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: spacing={}mm timeout={}ms reset={}ms display={}ms",
                config.spacing_mm,
                config.sensor_timeout_ms,
                config.sensor_reset_ms,
                config.display_timeout_ms
            );
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            SpeedometerConfig::default()
        }
    }
}
