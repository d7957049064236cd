//! State machine definition
//!
//! Sensor gating, alarms and display output are all a function of the
//! current state and an event.

use super::events::Event;
use crate::input::Sensor;

/// Speedometer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Idle with a blank screen, waiting for either beam
    On,
    /// Beam A broken, waiting for beam B
    Timing1,
    /// Beam B broken, waiting for beam A
    Timing2,
    /// Both beams broken, computing the speed
    CalculateSpeed,
    /// Reading shown, sensors locked out
    DisplaySpeed,
    /// Reading shown, sensors live again
    DisplaySpeedSensorReset,
    /// Reserved, no behavior defined
    LowPower,
    /// Reserved, no behavior defined
    WakeUp,
}

impl State {
    /// Check if a timing attempt may start from this state
    ///
    /// A sensor timeout resumes to the state the attempt started from.
    pub fn is_timing_origin(&self) -> bool {
        matches!(self, State::On | State::DisplaySpeedSensorReset)
    }

    /// Check if this is a reserved state without behavior
    pub fn is_placeholder(&self) -> bool {
        matches!(self, State::LowPower | State::WakeUp)
    }

    /// Beam that completes the pair in a timing state
    pub fn awaited_sensor(&self) -> Option<Sensor> {
        match self {
            State::Timing1 => Some(Sensor::B),
            State::Timing2 => Some(Sensor::A),
            _ => None,
        }
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // On transitions
            (On, ButtonPressed) => DisplaySpeedSensorReset,
            (On, SensorTriggered(Sensor::A)) => Timing1,
            (On, SensorTriggered(Sensor::B)) => Timing2,

            // Timing transitions
            (Timing1, PartnerTriggered(Sensor::B)) => CalculateSpeed,
            (Timing2, PartnerTriggered(Sensor::A)) => CalculateSpeed,
            (Timing1 | Timing2, SensorTimeout { resume }) => {
                if resume.is_timing_origin() {
                    resume
                } else {
                    On
                }
            }

            // CalculateSpeed transitions
            (CalculateSpeed, MeasurementReady) => DisplaySpeed,
            (CalculateSpeed, MeasurementDiscarded) => On,

            // DisplaySpeed transitions
            (DisplaySpeed, SensorResetElapsed) => DisplaySpeedSensorReset,

            // DisplaySpeedSensorReset transitions
            (DisplaySpeedSensorReset, SensorTriggered(Sensor::A)) => Timing1,
            (DisplaySpeedSensorReset, SensorTriggered(Sensor::B)) => Timing2,
            (DisplaySpeedSensorReset, UnitChanged) => DisplaySpeedSensorReset,
            (DisplaySpeedSensorReset, DisplayTimeout) => On,

            // Default: stay in current state
            _ => self,
        }
    }
}
