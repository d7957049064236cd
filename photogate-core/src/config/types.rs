//! Speedometer configuration

use crate::alarm::AlarmRole;

/// Default beam spacing
pub const DEFAULT_SPACING_MM: u32 = 32;
/// Default time allowed for the partner beam
pub const DEFAULT_SENSOR_TIMEOUT_MS: u32 = 2000;
/// Default re-trigger lockout after a measurement
pub const DEFAULT_SENSOR_RESET_MS: u32 = 200;
/// Default time a reading stays on screen
pub const DEFAULT_DISPLAY_TIMEOUT_MS: u32 = 15000;
/// Default quiet time before a unit change is saved
pub const DEFAULT_UNIT_CHANGE_MS: u32 = 10000;
/// Default button lockout
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;

/// Beam geometry and alarm durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedometerConfig {
    /// Distance between the two beams
    pub spacing_mm: u32,
    /// Partner beam must arrive within this
    pub sensor_timeout_ms: u32,
    /// Sensors are locked out this long after a measurement
    pub sensor_reset_ms: u32,
    /// Reading is cleared after this much inactivity
    pub display_timeout_ms: u32,
    /// Unit is saved after this long without another change
    pub unit_change_ms: u32,
    /// Minimum time between accepted button presses
    pub debounce_ms: u32,
}

impl Default for SpeedometerConfig {
    fn default() -> Self {
        Self {
            spacing_mm: DEFAULT_SPACING_MM,
            sensor_timeout_ms: DEFAULT_SENSOR_TIMEOUT_MS,
            sensor_reset_ms: DEFAULT_SENSOR_RESET_MS,
            display_timeout_ms: DEFAULT_DISPLAY_TIMEOUT_MS,
            unit_change_ms: DEFAULT_UNIT_CHANGE_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SpeedometerConfig {
    /// Alarm duration for `role`
    pub const fn duration_ms(&self, role: AlarmRole) -> u32 {
        match role {
            AlarmRole::SensorTimeout => self.sensor_timeout_ms,
            AlarmRole::SensorReset => self.sensor_reset_ms,
            AlarmRole::DisplayTimeout => self.display_timeout_ms,
            AlarmRole::UnitChangeTimeout => self.unit_change_ms,
            AlarmRole::ButtonDebounce => self.debounce_ms,
        }
    }

    /// Button lockout in microseconds, saturating
    pub const fn debounce_us(&self) -> u32 {
        self.debounce_ms.saturating_mul(1000)
    }

    /// Check that no value is zero
    pub fn is_valid(&self) -> bool {
        self.spacing_mm > 0 && AlarmRole::ALL.iter().all(|role| self.duration_ms(*role) > 0)
    }
}
