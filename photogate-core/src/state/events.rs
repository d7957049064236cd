//! Events that trigger state transitions

use super::machine::State;
use crate::input::Sensor;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Sensor events
    /// First beam of a pair was broken
    SensorTriggered(Sensor),
    /// Second beam of a pair was broken
    PartnerTriggered(Sensor),
    /// Partner beam never arrived; carries where the attempt started
    SensorTimeout { resume: State },

    // Measurement events
    /// Speed computed and shown
    MeasurementReady,
    /// Beams reported the same instant; nothing shown
    MeasurementDiscarded,
    /// Re-trigger lockout after a measurement ended
    SensorResetElapsed,
    /// Reading has been on screen long enough
    DisplayTimeout,

    // Button events
    /// Button pressed while idle
    ButtonPressed,
    /// Button accepted while a reading is shown; unit advanced
    UnitChanged,
}
