//! Measurement context carried between states

use crate::speed::{SpeedUnit, UnitCycler};

/// Timestamps of the current attempt and the last committed reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasurementContext {
    /// First beam timestamp
    pub start_time_us: u32,
    /// Partner beam timestamp
    pub end_time_us: u32,
    /// Last committed speed; survives until the next committed reading
    pub current_speed_m_s: f64,
    /// Selected display unit
    pub units: UnitCycler,
}

impl Default for MeasurementContext {
    fn default() -> Self {
        Self::new(SpeedUnit::default())
    }
}

impl MeasurementContext {
    /// Create an empty context showing speeds in `unit`
    pub const fn new(unit: SpeedUnit) -> Self {
        Self {
            start_time_us: 0,
            end_time_us: 0,
            current_speed_m_s: 0.0,
            units: UnitCycler::new(unit),
        }
    }

    /// Beam-to-beam time, correct across one counter wrap
    pub const fn elapsed_us(&self) -> u32 {
        self.end_time_us.wrapping_sub(self.start_time_us)
    }

    /// Currently selected display unit
    pub const fn unit(&self) -> SpeedUnit {
        self.units.current()
    }
}
