//! Alarm service owned by the poll loop

use super::flags::AlarmFlags;
use super::role::{AlarmRole, TimerId};
use crate::traits::{AlarmTimer, TimerError};

/// Arms and cancels the one-shot alarms
///
/// Keeps at most one outstanding timer per role: scheduling a role that is
/// already pending cancels the old timer first.
pub struct AlarmService<'a, T: AlarmTimer> {
    timer: T,
    flags: &'a AlarmFlags,
    pending: [Option<TimerId>; AlarmRole::COUNT],
}

impl<'a, T: AlarmTimer> AlarmService<'a, T> {
    /// Create a service over a timer backend and the shared fired flags
    pub fn new(timer: T, flags: &'a AlarmFlags) -> Self {
        Self {
            timer,
            flags,
            pending: [None; AlarmRole::COUNT],
        }
    }

    /// Arm `role` to fire after `duration_ms`
    ///
    /// Cancels any timer already pending for the role and clears its
    /// fired flag before arming.
    pub fn schedule(&mut self, role: AlarmRole, duration_ms: u32) -> Result<TimerId, TimerError> {
        self.cancel(role);
        let id = self.timer.schedule_once(role, duration_ms)?;
        self.pending[role.index()] = Some(id);
        Ok(id)
    }

    /// Cancel `role` and drop its fired flag
    ///
    /// No-op if nothing is pending.
    pub fn cancel(&mut self, role: AlarmRole) {
        if let Some(id) = self.pending[role.index()].take() {
            self.timer.cancel(role, id);
        }
        self.flags.clear(role);
    }

    /// Cancel every role and drop every fired flag
    pub fn cancel_all(&mut self) {
        for role in AlarmRole::ALL {
            self.cancel(role);
        }
    }

    /// Check whether `role` has fired, without consuming the flag
    pub fn fired(&self, role: AlarmRole) -> bool {
        self.flags.is_raised(role)
    }

    /// Consume the fired flag of `role`
    pub fn take_fired(&mut self, role: AlarmRole) -> bool {
        if self.flags.take(role) {
            self.pending[role.index()] = None;
            true
        } else {
            false
        }
    }

    /// Get the timer backend
    pub fn timer(&self) -> &T {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls instead of running timers
    struct MockTimer {
        next_id: u32,
        last_scheduled: Option<(AlarmRole, u32)>,
        cancelled: [Option<TimerId>; 8],
        cancel_count: usize,
        exhausted: bool,
    }

    impl MockTimer {
        fn new() -> Self {
            Self {
                next_id: 1,
                last_scheduled: None,
                cancelled: [None; 8],
                cancel_count: 0,
                exhausted: false,
            }
        }
    }

    impl AlarmTimer for MockTimer {
        fn schedule_once(&mut self, role: AlarmRole, duration_ms: u32) -> Result<TimerId, TimerError> {
            if self.exhausted {
                return Err(TimerError::Exhausted);
            }
            let id = TimerId(self.next_id);
            self.next_id += 1;
            self.last_scheduled = Some((role, duration_ms));
            Ok(id)
        }

        fn cancel(&mut self, _role: AlarmRole, id: TimerId) {
            self.cancelled[self.cancel_count] = Some(id);
            self.cancel_count += 1;
        }
    }

    #[test]
    fn test_schedule_arms_and_clears_flag() {
        let flags = AlarmFlags::new();
        flags.raise(AlarmRole::SensorTimeout);

        let mut alarms = AlarmService::new(MockTimer::new(), &flags);
        let id = alarms.schedule(AlarmRole::SensorTimeout, 2000).unwrap();

        assert_eq!(id, TimerId(1));
        assert!(!alarms.fired(AlarmRole::SensorTimeout));
        assert_eq!(alarms.pending[AlarmRole::SensorTimeout.index()], Some(id));
        assert_eq!(
            alarms.timer().last_scheduled,
            Some((AlarmRole::SensorTimeout, 2000))
        );
    }

    #[test]
    fn test_reschedule_cancels_previous() {
        let flags = AlarmFlags::new();
        let mut alarms = AlarmService::new(MockTimer::new(), &flags);

        let first = alarms.schedule(AlarmRole::DisplayTimeout, 15000).unwrap();
        let second = alarms.schedule(AlarmRole::DisplayTimeout, 15000).unwrap();

        assert_ne!(first, second);
        assert_eq!(alarms.timer().cancel_count, 1);
        assert_eq!(alarms.timer().cancelled[0], Some(first));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let flags = AlarmFlags::new();
        let mut alarms = AlarmService::new(MockTimer::new(), &flags);

        alarms.cancel(AlarmRole::SensorReset);
        assert_eq!(alarms.timer().cancel_count, 0);

        alarms.schedule(AlarmRole::SensorReset, 200).unwrap();
        alarms.cancel(AlarmRole::SensorReset);
        alarms.cancel(AlarmRole::SensorReset);
        assert_eq!(alarms.timer().cancel_count, 1);
        assert_eq!(alarms.pending[AlarmRole::SensorReset.index()], None);
    }

    #[test]
    fn test_cancel_drops_stale_flag() {
        let flags = AlarmFlags::new();
        let mut alarms = AlarmService::new(MockTimer::new(), &flags);

        alarms.schedule(AlarmRole::SensorTimeout, 2000).unwrap();
        flags.raise(AlarmRole::SensorTimeout);
        alarms.cancel(AlarmRole::SensorTimeout);

        assert!(!alarms.take_fired(AlarmRole::SensorTimeout));
    }

    #[test]
    fn test_take_fired_releases_pending() {
        let flags = AlarmFlags::new();
        let mut alarms = AlarmService::new(MockTimer::new(), &flags);

        alarms.schedule(AlarmRole::SensorReset, 200).unwrap();
        flags.raise(AlarmRole::SensorReset);
        assert!(alarms.fired(AlarmRole::SensorReset));

        assert!(alarms.take_fired(AlarmRole::SensorReset));
        assert!(!alarms.take_fired(AlarmRole::SensorReset));

        // Nothing left to cancel once the alarm fired and was consumed
        alarms.cancel(AlarmRole::SensorReset);
        assert_eq!(alarms.timer().cancel_count, 0);
    }

    #[test]
    fn test_exhausted_timer_leaves_role_idle() {
        let flags = AlarmFlags::new();
        let mut timer = MockTimer::new();
        timer.exhausted = true;
        let mut alarms = AlarmService::new(timer, &flags);

        assert_eq!(
            alarms.schedule(AlarmRole::SensorTimeout, 2000),
            Err(TimerError::Exhausted)
        );
        assert_eq!(alarms.pending[AlarmRole::SensorTimeout.index()], None);
    }

    #[test]
    fn test_cancel_all() {
        let flags = AlarmFlags::new();
        let mut alarms = AlarmService::new(MockTimer::new(), &flags);

        for role in AlarmRole::ALL {
            alarms.schedule(role, 100).unwrap();
        }
        flags.raise(AlarmRole::DisplayTimeout);
        alarms.cancel_all();

        assert!(!alarms.fired(AlarmRole::DisplayTimeout));
        for role in AlarmRole::ALL {
            assert_eq!(alarms.pending[role.index()], None);
        }
        assert_eq!(alarms.timer().cancel_count, AlarmRole::COUNT);
    }
}
