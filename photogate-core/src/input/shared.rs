//! Input block shared between interrupt context and the poll loop

use super::capture::EdgeCapture;
use crate::alarm::{AlarmFlags, AlarmRole, Completion};

/// Everything written from interrupt context
///
/// Intended to live in a `static` so edge and alarm handlers can reach it
/// without borrowing from the controller.
pub struct SharedInputs {
    /// Sensor and button edges
    pub capture: EdgeCapture,
    /// Alarm fired flags
    pub alarms: AlarmFlags,
}

impl Default for SharedInputs {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedInputs {
    /// Create an input block in the power-on state
    pub const fn new() -> Self {
        Self {
            capture: EdgeCapture::new(),
            alarms: AlarmFlags::new(),
        }
    }

    /// Alarm expiry entry point for the timer backend
    ///
    /// Runs the role's completion action and nothing else; all further
    /// handling happens in the poll loop.
    pub fn on_alarm_fired(&self, role: AlarmRole) {
        self.alarms.raise(role);
        match role.completion() {
            Completion::RaiseFlag => {}
            Completion::RaiseFlagAndReleaseButton => self.capture.enable_button(),
        }
    }
}
