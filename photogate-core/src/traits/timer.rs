//! Time source traits

use crate::alarm::{AlarmRole, TimerId};

/// Errors from the one-shot timer backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// No free hardware alarm or timer slot
    Exhausted,
}

/// Free-running microsecond clock
///
/// Wraps every 2^32 µs (about 71.6 minutes). Callers compare timestamps
/// with wrapping subtraction.
pub trait Clock {
    /// Current time in microseconds
    fn now_us(&self) -> u32;
}

/// One-shot alarm backend
///
/// When an armed alarm expires the backend must call
/// [`crate::input::SharedInputs::on_alarm_fired`] with the role it was
/// armed for. A cancelled alarm must not fire.
pub trait AlarmTimer {
    /// Arm a one-shot alarm for `role` that expires after `duration_ms`
    fn schedule_once(&mut self, role: AlarmRole, duration_ms: u32) -> Result<TimerId, TimerError>;

    /// Cancel a previously armed alarm
    ///
    /// Cancelling an alarm that already fired is a no-op.
    fn cancel(&mut self, role: AlarmRole, id: TimerId);
}
